use crate::commands::{parse_numbers, BuildCmd, CliError};
use meshline::path::PointSource;
use meshline::tessellation::{AttributeName, LineBuffers, MeshLine};
use std::io::Write;

pub fn build(mut cmd: BuildCmd) -> Result<(), CliError> {
    let coords = parse_numbers(&cmd.input)?;
    log::debug!("building a line from {} coordinates", coords.len());
    let mut line = MeshLine::with_points(PointSource::Flat(&coords), cmd.width_profile.to_profile())?;

    if !cmd.advance.is_empty() && line.buffers().is_empty() {
        return Err(CliError::Parse("can't advance an empty line".to_string()));
    }

    for p in &cmd.advance {
        line.advance(*p);
    }

    if cmd.count {
        let buffers = line.buffers();
        writeln!(&mut *cmd.output, "points: {}", buffers.point_count())?;
        writeln!(&mut *cmd.output, "vertices: {}", buffers.vertex_count())?;
        writeln!(&mut *cmd.output, "triangles: {}", buffers.triangle_count())?;

        return Ok(());
    }

    print_buffers(&mut *cmd.output, line.buffers())?;

    Ok(())
}

pub fn print_buffers(output: &mut dyn Write, buffers: &LineBuffers) -> Result<(), CliError> {
    for name in &AttributeName::VERTEX {
        write!(output, "{}: [", name.name())?;
        let mut is_first = true;
        for item in buffers.attribute(*name).chunks(name.item_size()) {
            if !is_first {
                write!(output, ", ")?;
            }
            if item.len() == 1 {
                write!(output, "{}", item[0])?;
            } else {
                write!(output, "(")?;
                for (i, v) in item.iter().enumerate() {
                    if i > 0 {
                        write!(output, ", ")?;
                    }
                    write!(output, "{}", v)?;
                }
                write!(output, ")")?;
            }
            is_first = false;
        }
        writeln!(output, "]")?;
    }

    write!(output, "{}: [", AttributeName::Index.name())?;
    let mut is_first = true;
    for index in buffers.indices() {
        if !is_first {
            write!(output, ", ")?;
        }
        write!(output, "{}", index)?;
        is_first = false;
    }
    writeln!(output, "]")?;

    if let Some(bounds) = buffers.bounds() {
        let (min, max) = (bounds.aabb.min, bounds.aabb.max);
        writeln!(
            output,
            "bounds: ({}, {}, {}) ({}, {}, {})",
            min.x, min.y, min.z, max.x, max.y, max.z
        )?;
    }

    Ok(())
}

#[test]
fn print_small_line() {
    let coords = [0.0, 0.0, 0.0, 1.0, 0.0, 0.0];
    let line = MeshLine::with_points(PointSource::Flat(&coords), None).unwrap();

    let mut output = Vec::new();
    print_buffers(&mut output, line.buffers()).unwrap();
    let text = String::from_utf8(output).unwrap();

    assert!(text.contains("position: [(0, 0, 0), (0, 0, 0), (1, 0, 0), (1, 0, 0)]\n"));
    assert!(text.contains("side: [1, -1, 1, -1]\n"));
    assert!(text.contains("index: [0, 1, 2, 2, 1, 3]\n"));
    assert!(text.contains("bounds: (0, 0, 0) (1, 0, 0)\n"));
}
