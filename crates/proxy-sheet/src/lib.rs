mod constants;
mod io;
mod layout;
mod options;
mod pdf;
mod raster;
mod stats;
mod types;
mod winansi;

pub use constants::*;
pub use io::{load_image, load_images};
pub use layout::*;
pub use options::*;
pub use pdf::{compose, generate_pdf};
pub use raster::prepare_card;
pub use stats::calculate_statistics;
pub use types::*;
pub use winansi::encode_winansi;
