pub mod analyze;
pub mod daily;
pub mod favorite;
pub mod favorites;
pub mod generate;
pub mod history;

pub use analyze::*;
pub use daily::*;
pub use favorite::*;
pub use favorites::*;
pub use generate::*;
pub use history::*;
