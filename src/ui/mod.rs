/// User interface widgets
///
/// - `background.rs` - animated 3D pyramid field behind the page
/// - `spinner.rs` - loading indicator
/// - `result_card.rs` - display of a translation result
/// - `tabs.rs` - decode/encode mode switcher
/// - `style.rs` - colours and container styles

pub mod background;
pub mod result_card;
pub mod spinner;
pub mod style;
pub mod tabs;
