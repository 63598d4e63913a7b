use serde::{Deserialize, Deserializer, Serialize};

/// Piece or sheet dimensions as (height, width).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Size {
    pub h: usize,
    pub w: usize,
}

impl Size {
    pub fn new(h: usize, w: usize) -> Self {
        Self { h, w }
    }

    pub fn area(&self) -> u64 {
        self.h as u64 * self.w as u64
    }

    pub fn rotated(&self) -> Self {
        Self {
            h: self.w,
            w: self.h,
        }
    }

    pub fn fits_in(&self, other: &Size) -> bool {
        self.h <= other.h && self.w <= other.w
    }
}

impl std::fmt::Display for Size {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.h, self.w)
    }
}

/// Zero-based top-left cell coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A pending request to cut `quantity` pieces of `size` from some stock.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Demand {
    pub size: Size,
    #[serde(deserialize_with = "deserialize_u32_from_number")]
    pub quantity: u32,
}

/// One cutting decision: place a piece of `size` on stock `stock_idx` at
/// `position`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    pub stock_idx: usize,
    pub size: Size,
    pub position: Position,
}

/// Accepts integer fields sent as JSON floats (e.g. `3.0`).
pub fn deserialize_u32_from_number<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let v = f64::deserialize(deserializer)?;
    if v < 0.0 || v > u32::MAX as f64 || v.fract() != 0.0 {
        return Err(serde::de::Error::custom(format!(
            "expected a non-negative integer, got {v}"
        )));
    }
    Ok(v as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotated_swaps_axes() {
        let s = Size::new(2, 3);
        assert_eq!(s.rotated(), Size::new(3, 2));
        assert_eq!(s.rotated().rotated(), s);
    }

    #[test]
    fn test_fits_in() {
        assert!(Size::new(2, 3).fits_in(&Size::new(5, 5)));
        assert!(Size::new(5, 5).fits_in(&Size::new(5, 5)));
        assert!(!Size::new(6, 3).fits_in(&Size::new(5, 5)));
        assert!(!Size::new(3, 6).fits_in(&Size::new(5, 5)));
    }

    #[test]
    fn test_display() {
        assert_eq!(Size::new(2, 3).to_string(), "2x3");
        assert_eq!(Position::new(0, 4).to_string(), "(0, 4)");
    }

    #[test]
    fn test_quantity_accepts_json_float() {
        let d: Demand = serde_json::from_str(r#"{"size":{"h":2,"w":3},"quantity":3.0}"#).unwrap();
        assert_eq!(d.quantity, 3);
        assert!(serde_json::from_str::<Demand>(r#"{"size":{"h":2,"w":3},"quantity":3.5}"#).is_err());
        assert!(serde_json::from_str::<Demand>(r#"{"size":{"h":2,"w":3},"quantity":-1}"#).is_err());
    }
}
