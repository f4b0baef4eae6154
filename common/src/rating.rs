//! Rating to star conversion used by restaurant cards and dish rows.

use serde::{Deserialize, Serialize};

use crate::search_const::STAR_SCALE;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StarFill {
    pub filled: u8,
    pub outline: u8,
}

/// Stars for a 0-5 rating: `min(5, round(r))` filled, the rest outlined.
///
/// Half values round up (4.5 gives 5 stars). Negative or NaN ratings give no
/// filled stars.
pub fn stars(rating: f64) -> StarFill {
    let filled = if rating.is_nan() {
        0
    } else {
        rating.round().clamp(0.0, STAR_SCALE as f64) as u8
    };
    StarFill { filled, outline: STAR_SCALE - filled }
}

/// `None` when the item carries no rating; nothing is drawn then.
pub fn stars_for(rating: Option<f64>) -> Option<StarFill> {
    rating.map(stars)
}

/// Text next to the stars, e.g. `(4.5/5)`.
pub fn rating_label(rating: f64) -> String {
    format!("({}/{})", rating, STAR_SCALE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filled_plus_outline_is_always_five() {
        let mut r = 0.0;
        while r <= 5.0 {
            let fill = stars(r);
            assert_eq!(fill.filled as f64, r.round(), "rating {r}");
            assert_eq!(fill.filled + fill.outline, 5);
            r += 0.1;
        }
    }

    #[test]
    fn rounding_examples() {
        assert_eq!(stars(0.0), StarFill { filled: 0, outline: 5 });
        assert_eq!(stars(2.4), StarFill { filled: 2, outline: 3 });
        assert_eq!(stars(2.5), StarFill { filled: 3, outline: 2 });
        assert_eq!(stars(4.6), StarFill { filled: 5, outline: 0 });
        assert_eq!(stars(5.0), StarFill { filled: 5, outline: 0 });
    }

    #[test]
    fn out_of_scale_values_are_clamped() {
        assert_eq!(stars(7.0).filled, 5);
        assert_eq!(stars(-1.0).filled, 0);
        assert_eq!(stars(f64::NAN).filled, 0);
    }

    #[test]
    fn missing_rating_draws_nothing() {
        assert_eq!(stars_for(None), None);
        assert_eq!(stars_for(Some(3.2)), Some(StarFill { filled: 3, outline: 2 }));
        assert_eq!(rating_label(4.5), "(4.5/5)");
    }
}
