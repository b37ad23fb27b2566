//! Text form of curves: `"x,y;x,y;"`.

use std::fmt;
use std::str::FromStr;

use super::types::{ControlPoint, Curve};
use crate::LutError;

impl fmt::Display for Curve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for p in self.points() {
            write!(f, "{},{};", p.x, p.y)?;
        }
        Ok(())
    }
}

impl FromStr for Curve {
    type Err = LutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let points = s
            .split(';')
            .map(str::trim)
            .filter(|pair| !pair.is_empty())
            .map(parse_point)
            .collect::<Result<Vec<_>, _>>()?;
        Curve::new(points)
    }
}

fn parse_point(pair: &str) -> Result<ControlPoint, LutError> {
    let (x, y) = pair
        .split_once(',')
        .ok_or_else(|| LutError::ParseError(format!("expected 'x,y', got '{pair}'")))?;
    let coord = |v: &str| {
        v.trim()
            .parse::<f32>()
            .map_err(|e| LutError::ParseError(format!("bad coordinate '{v}': {e}")))
    };
    Ok(ControlPoint::new(coord(x)?, coord(y)?))
}
