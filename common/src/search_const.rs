//! Constants shared by the search form, result cards and upload form.

/// Price slider upper bound; also the "no filter" value.
pub const MAX_PRICE: u32 = 35;

/// Rating slider upper bound and size of the star scale.
pub const MAX_RATING: f64 = 5.0;
pub const STAR_SCALE: u8 = 5;

/// Slider step for the minimum rating filter.
pub const RATING_STEP: f64 = 0.1;

/// Dishes shown on a collapsed restaurant card.
pub const DISHES_PREVIEW_COUNT: usize = 3;

/// Advertised upload limit. The server decides; the client only displays it.
pub const ADVISORY_MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

/// Request body limit for server functions. Leaves room for a base64 encoded
/// file well past the advertised limit.
pub const SERVER_FN_BODY_LIMIT: usize = 32 * 1024 * 1024;

pub const ACCEPTED_UPLOAD_EXTENSIONS: [&str; 4] = ["pdf", "jpg", "jpeg", "png"];

pub const DEFAULT_API_URL: &str = "http://localhost:5000";
