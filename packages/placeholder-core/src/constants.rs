/// 画像の最大ピクセル数（4000x4000、巨大なバッファ確保を防止）
pub const MAX_PIXELS: u64 = 16_000_000;

/// JPEG エンコード品質（1-100、常に最高品質）
pub const JPEG_QUALITY: u8 = 100;

/// デフォルトの幅
pub const DEFAULT_WIDTH: &str = "400";

/// デフォルトの高さ
pub const DEFAULT_HEIGHT: &str = "300";

/// デフォルトの背景色
pub const DEFAULT_BACKGROUND: &str = "a5a5a5";

/// デフォルトの文字色
pub const DEFAULT_COLOR: &str = "fff";

/// デフォルトのラベル（空なら {width}x{height} に置き換わる）
pub const DEFAULT_LABEL: &str = "";
