//! モデル定義
//!
//! ガレージで扱う車両のデータモデルを定義します。
//! 車種ごとの固有属性はモジュールに分離されています。

mod car;
mod fleet;
mod motorbike;
mod truck;
mod variant;
mod vehicle;

// Re-exports
pub use car::*;
pub use fleet::*;
pub use motorbike::*;
pub use truck::*;
pub use variant::*;
pub use vehicle::*;
