use std::{
    f64::consts::FRAC_PI_2,
    fmt,
};

use crate::{
    error::ConfigError,
    vector::Vec3,
};


/// Parsing states.
enum Parse {
    None,
    Axis,
    Angle,
    Vector,
}


/// Settings for the demo binary.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub axis: Vec3,
    /// Radians.
    pub angle: f64,
    pub vector: Vec3,
}
impl Config {
    /// Create a new Config with the specified command line arguments.
    pub fn new(args: Vec<String>) -> Result<Config, ConfigError> {
        let mut parser = Parse::None;
        let mut cfg    = Config::default();
        let mut coords = Vec::with_capacity(3);

        for arg in args.into_iter() {
            match arg.as_str() {
                "-axis" | "-angle" | "-vector" => {
                    if !matches!(parser, Parse::None) {
                        return Err(ConfigError::MissingValue(arg));
                    }
                    parser = match arg.as_str() {
                        "-axis"  => Parse::Axis,
                        "-angle" => Parse::Angle,
                        _        => Parse::Vector,
                    };
                    continue;
                }
                _ => {},
            }
            match parser {
                Parse::Axis | Parse::Vector => {
                    let flag = if matches!(parser, Parse::Axis) { "-axis" } else { "-vector" };
                    coords.push(parse_number(flag, &arg)?);
                    if coords.len() == 3 {
                        let vec = Vec3::new(coords[0], coords[1], coords[2]);
                        if matches!(parser, Parse::Axis) {
                            cfg.axis = vec;
                        }
                        else {
                            cfg.vector = vec;
                        }
                        coords.clear();
                        parser = Parse::None;
                    }
                }
                Parse::Angle => {
                    cfg.angle = parse_number("-angle", &arg)?;
                    parser = Parse::None;
                }
                Parse::None => {
                    return Err(ConfigError::UnknownFlag(arg));
                }
            }
        }
        match parser {
            Parse::Axis   => Err(ConfigError::MissingValue(String::from("-axis"))),
            Parse::Angle  => Err(ConfigError::MissingValue(String::from("-angle"))),
            Parse::Vector => Err(ConfigError::MissingValue(String::from("-vector"))),
            Parse::None   => Ok(cfg),
        }
    }
}
impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "
            \rAxis:   {}
            \rAngle:  {} rad
            \rVector: {}",
            self.axis,
            self.angle,
            self.vector,
        )
    }
}
impl Default for Config {
    fn default() -> Self {
        Self {
            axis: Vec3::new(0.0, 0.0, 1.0),
            angle: FRAC_PI_2,
            vector: Vec3::unit_x(),
        }
    }
}

fn parse_number(flag: &str, arg: &str) -> Result<f64, ConfigError> {
    arg.parse::<f64>().map_err(|_| {
        ConfigError::InvalidNumber(flag.to_string(), arg.to_string())
    })
}

#[cfg(test)]
fn args(s: &str) -> Vec<String> {
    s.split_whitespace().map(String::from).collect()
}

#[test]
fn empty_args_give_defaults() {
    let cfg = Config::new(Vec::new()).unwrap();
    assert!(cfg == Config::default());
}

#[test]
fn parses_all_flags() {
    let cfg = Config::new(args("-axis 1 0 0 -angle 0.5 -vector 0 2 -3")).unwrap();
    assert!(cfg.axis == Vec3::new(1.0, 0.0, 0.0));
    assert!(cfg.angle == 0.5);
    assert!(cfg.vector == Vec3::new(0.0, 2.0, -3.0));
}

#[test]
fn rejects_bad_input() {
    assert!(matches!(
        Config::new(args("-angle half")),
        Err(ConfigError::InvalidNumber(..))
    ));
    assert!(matches!(
        Config::new(args("-axis 1 0")),
        Err(ConfigError::MissingValue(..))
    ));
    assert!(matches!(
        Config::new(args("-axis 1 -angle 2")),
        Err(ConfigError::MissingValue(..))
    ));
    assert!(matches!(
        Config::new(args("-speed 3")),
        Err(ConfigError::UnknownFlag(..))
    ));
}
