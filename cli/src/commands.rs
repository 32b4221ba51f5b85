use meshline::math::{point, vector, Point, Ray};
use meshline::tessellation::{MeshLineError, WidthProfile};
use std::fmt;
use std::io;
use std::str::FromStr;

#[derive(Debug)]
pub enum CliError {
    Io(io::Error),
    MeshLine(MeshLineError),
    Parse(String),
}

impl From<io::Error> for CliError {
    fn from(err: io::Error) -> Self {
        CliError::Io(err)
    }
}

impl From<MeshLineError> for CliError {
    fn from(err: MeshLineError) -> Self {
        CliError::MeshLine(err)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CliError::Io(err) => write!(f, "I/O error: {}", err),
            CliError::MeshLine(err) => write!(f, "{}", err),
            CliError::Parse(msg) => write!(f, "Parse error: {}", msg),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum WidthProfileKind {
    /// No profile, every width is 1.
    Constant,
    /// Grows from 0 to 1 along the line.
    Linear,
    /// Shrinks from 1 to 0 along the line.
    Taper,
}

impl WidthProfileKind {
    pub fn to_profile(self) -> Option<WidthProfile> {
        match self {
            WidthProfileKind::Constant => None,
            WidthProfileKind::Linear => Some(Box::new(|t: f32| t)),
            WidthProfileKind::Taper => Some(Box::new(|t: f32| 1.0 - t)),
        }
    }
}

impl FromStr for WidthProfileKind {
    type Err = CliError;
    fn from_str(s: &str) -> Result<Self, CliError> {
        match s {
            "constant" => Ok(WidthProfileKind::Constant),
            "linear" => Ok(WidthProfileKind::Linear),
            "taper" => Ok(WidthProfileKind::Taper),
            _ => Err(CliError::Parse(format!("unknown width profile {:?}", s))),
        }
    }
}

pub struct BuildCmd {
    pub input: String,
    pub output: Box<dyn io::Write>,
    pub width_profile: WidthProfileKind,
    pub advance: Vec<Point>,
    pub count: bool,
}

pub struct PickCmd {
    pub input: String,
    pub output: Box<dyn io::Write>,
    pub width_profile: WidthProfileKind,
    pub ray: Ray,
    pub line_width: f32,
    pub threshold: f32,
    pub segments: bool,
}

/// Parses numbers separated by commas or white space. Lines starting with `#`
/// are ignored.
pub fn parse_numbers(text: &str) -> Result<Vec<f32>, CliError> {
    let mut numbers = Vec::new();
    for line in text.lines() {
        let line = line.trim();
        if line.starts_with('#') {
            continue;
        }

        for token in line.split(|c: char| c == ',' || c.is_whitespace()) {
            if token.is_empty() {
                continue;
            }
            let value = token
                .parse()
                .map_err(|_| CliError::Parse(format!("invalid number {:?}", token)))?;
            numbers.push(value);
        }
    }

    Ok(numbers)
}

fn parse_exactly(text: &str, count: usize, what: &str) -> Result<Vec<f32>, CliError> {
    let numbers = parse_numbers(text)?;
    if numbers.len() != count {
        return Err(CliError::Parse(format!(
            "expected {} numbers for {}, got {:?}",
            count, what, text
        )));
    }

    Ok(numbers)
}

/// Parses `x,y,z`.
pub fn parse_point(text: &str) -> Result<Point, CliError> {
    let n = parse_exactly(text, 3, "a point")?;

    Ok(point(n[0], n[1], n[2]))
}

/// Parses `ox,oy,oz,dx,dy,dz`.
pub fn parse_ray(text: &str) -> Result<Ray, CliError> {
    let n = parse_exactly(text, 6, "a ray")?;
    let direction = vector(n[3], n[4], n[5]);
    if direction.square_length() == 0.0 {
        return Err(CliError::Parse("the ray direction is zero".to_string()));
    }

    Ok(Ray::new(point(n[0], n[1], n[2]), direction))
}

pub fn parse_float(text: &str, what: &str) -> Result<f32, CliError> {
    text.trim()
        .parse()
        .map_err(|_| CliError::Parse(format!("invalid {} {:?}", what, text)))
}

#[test]
fn numbers() {
    let text = "# a comment\n0, 1 2\n\n  3.5,4,5e1\n";
    assert_eq!(parse_numbers(text).unwrap(), vec![0.0, 1.0, 2.0, 3.5, 4.0, 50.0]);
    assert!(parse_numbers("1, two, 3").is_err());
}

#[test]
fn points_and_rays() {
    assert_eq!(parse_point("1,2,3").unwrap(), point(1.0, 2.0, 3.0));
    assert!(parse_point("1,2").is_err());

    let ray = parse_ray("0,0,5,0,0,-2").unwrap();
    assert_eq!(ray.origin, point(0.0, 0.0, 5.0));
    assert_eq!(ray.direction, vector(0.0, 0.0, -1.0));
    assert!(parse_ray("0,0,5,0,0,0").is_err());
}

#[test]
fn width_profiles() {
    assert_eq!("taper".parse::<WidthProfileKind>().unwrap(), WidthProfileKind::Taper);
    assert!("round".parse::<WidthProfileKind>().is_err());
    assert!(WidthProfileKind::Constant.to_profile().is_none());

    let linear = WidthProfileKind::Linear.to_profile().unwrap();
    assert_eq!(linear(0.25), 0.25);
}
