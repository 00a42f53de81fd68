use crate::constants::{
    DEFAULT_BACKGROUND, DEFAULT_COLOR, DEFAULT_HEIGHT, DEFAULT_LABEL, DEFAULT_WIDTH,
};

/// 認識されるリクエストパラメータ名
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKey {
    Width,
    Height,
    Background,
    Color,
    Label,
}

impl ParamKey {
    /// パラメータ名から ParamKey を作成
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "width" => Some(Self::Width),
            "height" => Some(Self::Height),
            "background" => Some(Self::Background),
            "color" => Some(Self::Color),
            "label" => Some(Self::Label),
            _ => None,
        }
    }

    /// デフォルト値
    pub fn default_value(&self) -> &'static str {
        match self {
            Self::Width => DEFAULT_WIDTH,
            Self::Height => DEFAULT_HEIGHT,
            Self::Background => DEFAULT_BACKGROUND,
            Self::Color => DEFAULT_COLOR,
            Self::Label => DEFAULT_LABEL,
        }
    }

    /// 指定値でデフォルトを上書きできるか
    ///
    /// label は空文字でも常に上書き可能。それ以外はデフォルトが空でない場合のみ。
    fn is_overridable(&self) -> bool {
        matches!(self, Self::Label) || !self.default_value().is_empty()
    }
}

/// デフォルト適用済みのリクエストパラメータ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestParameters {
    pub width: String,
    pub height: String,
    pub background: String,
    pub color: String,
    pub label: String,
}

impl Default for RequestParameters {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH.to_string(),
            height: DEFAULT_HEIGHT.to_string(),
            background: DEFAULT_BACKGROUND.to_string(),
            color: DEFAULT_COLOR.to_string(),
            label: DEFAULT_LABEL.to_string(),
        }
    }
}

impl RequestParameters {
    fn slot_mut(&mut self, key: ParamKey) -> &mut String {
        match key {
            ParamKey::Width => &mut self.width,
            ParamKey::Height => &mut self.height,
            ParamKey::Background => &mut self.background,
            ParamKey::Color => &mut self.color,
            ParamKey::Label => &mut self.label,
        }
    }
}

/// 指定されたパラメータをデフォルト値とマージする
///
/// 未知のキーは無視する。
pub fn resolve_params<I, K, V>(supplied: I) -> RequestParameters
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: Into<String>,
{
    let mut params = RequestParameters::default();

    for (name, value) in supplied {
        let Some(key) = ParamKey::from_name(name.as_ref()) else {
            continue;
        };
        if key.is_overridable() {
            *params.slot_mut(key) = value.into();
        }
    }

    params
}
