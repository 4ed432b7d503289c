//! Review types and rating aggregation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::CommerceError;
use crate::ids::ReviewId;

/// Highest star rating a review can give.
pub const MAX_STARS: u8 = 5;

/// A star rating between 1 and 5 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Rating(u8);

impl Rating {
    /// Create a rating, rejecting values outside 1..=5.
    pub fn new(stars: i64) -> Result<Self, CommerceError> {
        if (1..=MAX_STARS as i64).contains(&stars) {
            Ok(Self(stars as u8))
        } else {
            Err(CommerceError::InvalidRating(stars))
        }
    }

    /// Create a rating, pulling out-of-range values into 1..=5.
    pub fn clamped(stars: i64) -> Self {
        Self(stars.clamp(1, MAX_STARS as i64) as u8)
    }

    /// Number of stars.
    pub fn stars(&self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for Rating {
    type Error = CommerceError;

    fn try_from(stars: i64) -> Result<Self, Self::Error> {
        Rating::new(stars)
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

/// A customer review.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Review {
    pub id: ReviewId,
    /// Display name of the reviewer.
    pub author: String,
    pub rating: Rating,
    pub comment: String,
    pub date: NaiveDate,
}

impl Review {
    /// Star string for this review, e.g. "★★★★☆".
    pub fn render_stars(&self) -> String {
        let filled = self.rating.stars() as usize;
        let empty = MAX_STARS as usize - filled;
        format!("{}{}", "★".repeat(filled), "☆".repeat(empty))
    }
}

/// Arithmetic mean of the review ratings.
///
/// An empty review list averages to `0.0`.
pub fn average_rating(reviews: &[Review]) -> f64 {
    if reviews.is_empty() {
        return 0.0;
    }
    let sum: u32 = reviews.iter().map(|r| r.rating.stars() as u32).sum();
    sum as f64 / reviews.len() as f64
}

/// Rating rounded to one decimal place for display, e.g. "4.7".
pub fn format_rating(average: f64) -> String {
    format!("{:.1}", average)
}

/// Number of filled stars shown for an average rating (rounded down).
pub fn filled_stars(average: f64) -> usize {
    (average.floor().max(0.0) as usize).min(MAX_STARS as usize)
}

/// Distribution of ratings (1-5 stars).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingDistribution {
    pub five_star: u32,
    pub four_star: u32,
    pub three_star: u32,
    pub two_star: u32,
    pub one_star: u32,
}

impl RatingDistribution {
    /// Count reviews per star level.
    pub fn from_reviews(reviews: &[Review]) -> Self {
        let mut dist = Self::default();
        for review in reviews {
            match review.rating.stars() {
                5 => dist.five_star += 1,
                4 => dist.four_star += 1,
                3 => dist.three_star += 1,
                2 => dist.two_star += 1,
                _ => dist.one_star += 1,
            }
        }
        dist
    }

    /// Number of reviews at a star level.
    pub fn count(&self, stars: u8) -> u32 {
        match stars {
            5 => self.five_star,
            4 => self.four_star,
            3 => self.three_star,
            2 => self.two_star,
            1 => self.one_star,
            _ => 0,
        }
    }

    /// Total number of reviews counted.
    pub fn total(&self) -> u32 {
        self.five_star + self.four_star + self.three_star + self.two_star + self.one_star
    }

    /// Get percentage for a rating level.
    pub fn percentage(&self, stars: u8) -> f32 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        (self.count(stars) as f32 / total as f32) * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn review(stars: i64) -> Review {
        Review {
            id: ReviewId::generate(),
            author: "Alex Johnson".to_string(),
            rating: Rating::new(stars).unwrap(),
            comment: "Fits well".to_string(),
            date: NaiveDate::from_ymd_opt(2023, 10, 15).unwrap(),
        }
    }

    #[test]
    fn test_rating_bounds() {
        assert!(Rating::new(1).is_ok());
        assert!(Rating::new(5).is_ok());
        assert_eq!(Rating::new(0), Err(CommerceError::InvalidRating(0)));
        assert_eq!(Rating::new(6), Err(CommerceError::InvalidRating(6)));
        assert_eq!(Rating::clamped(9).stars(), 5);
        assert_eq!(Rating::clamped(-1).stars(), 1);
    }

    #[test]
    fn test_rating_deserialize_rejects_out_of_range() {
        let ok: Rating = serde_json::from_str("4").unwrap();
        assert_eq!(ok.stars(), 4);
        assert!(serde_json::from_str::<Rating>("7").is_err());
    }

    #[test]
    fn test_average_rating() {
        let reviews = vec![review(5), review(4), review(5)];
        let avg = average_rating(&reviews);
        assert!((avg - 4.666_666).abs() < 1e-5);
        assert_eq!(format_rating(avg), "4.7");
    }

    #[test]
    fn test_average_rating_empty_is_zero() {
        let avg = average_rating(&[]);
        assert_eq!(avg, 0.0);
        assert!(!avg.is_nan());
        assert_eq!(format_rating(avg), "0.0");
    }

    #[test]
    fn test_filled_stars_rounds_down() {
        assert_eq!(filled_stars(4.67), 4);
        assert_eq!(filled_stars(5.0), 5);
        assert_eq!(filled_stars(0.0), 0);
    }

    #[test]
    fn test_review_stars() {
        assert_eq!(review(4).render_stars(), "★★★★☆");
    }

    #[test]
    fn test_distribution() {
        let reviews = vec![review(5), review(4), review(5)];
        let dist = RatingDistribution::from_reviews(&reviews);
        assert_eq!(dist.count(5), 2);
        assert_eq!(dist.count(4), 1);
        assert_eq!(dist.total(), 3);
        assert!((dist.percentage(5) - 66.666).abs() < 0.01);
        assert_eq!(RatingDistribution::default().percentage(5), 0.0);
    }
}
