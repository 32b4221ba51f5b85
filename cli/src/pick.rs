use crate::commands::{parse_numbers, CliError, PickCmd};
use meshline::algorithms::raycast::{raycast_line, Raycaster, Topology};
use meshline::math::Transform;
use meshline::path::PointSource;
use meshline::tessellation::MeshLine;
use std::io::Write;

pub fn pick(mut cmd: PickCmd) -> Result<(), CliError> {
    let coords = parse_numbers(&cmd.input)?;
    let line = MeshLine::with_points(PointSource::Flat(&coords), cmd.width_profile.to_profile())?;

    let raycaster = Raycaster::new(cmd.ray).with_line_threshold(cmd.threshold);
    let topology = if cmd.segments {
        Topology::Segments
    } else {
        Topology::Strip
    };

    log::debug!("picking {:?} with {:?} topology", raycaster, topology);
    let hit = raycast_line(
        &raycaster,
        line.buffers(),
        cmd.line_width,
        &Transform::identity(),
        topology,
    );

    match hit {
        Some(hit) => {
            writeln!(&mut *cmd.output, "index: {}", hit.index)?;
            writeln!(&mut *cmd.output, "distance: {}", hit.distance)?;
            writeln!(
                &mut *cmd.output,
                "point: ({}, {}, {})",
                hit.point.x, hit.point.y, hit.point.z
            )?;
        }
        None => {
            writeln!(&mut *cmd.output, "no hit")?;
        }
    }

    Ok(())
}
