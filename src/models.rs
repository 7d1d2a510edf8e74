use serde::Serialize;

/// Content-Encoding used for encrypted payloads unless the caller picks another
pub const DEFAULT_CONTENT_ENCODING: &str = "aesgcm";

/// Value of the TTL header sent with encrypted payloads
pub const ENCRYPTED_TTL: &str = "0";

/// Target of a message
///
/// A message addresses either a single device or one or more topics, never both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Recipient {
    /// Registration token of a single device
    Device(String),
    /// Topic name, without the `/topics/` prefix
    Topic(String),
}

/// Discriminant of [`Recipient`], used to keep a message homogeneous
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecipientKind {
    Device,
    Topic,
}

impl Recipient {
    pub fn device(token: impl Into<String>) -> Self {
        Self::Device(token.into())
    }

    pub fn topic(name: impl Into<String>) -> Self {
        Self::Topic(name.into())
    }

    /// Device token or topic name
    pub fn identifier(&self) -> &str {
        match self {
            Self::Device(token) => token,
            Self::Topic(name) => name,
        }
    }

    pub fn kind(&self) -> RecipientKind {
        match self {
            Self::Device(_) => RecipientKind::Device,
            Self::Topic(_) => RecipientKind::Topic,
        }
    }
}

/// Delivery priority
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Priority {
    #[default]
    High,
    Normal,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Normal => "normal",
        }
    }
}

/// User-visible notification fields
///
/// Every field is passed through to FCM verbatim; unset fields are left out of
/// the request body.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Notification {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sound: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub click_action: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_loc_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_loc_args: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_loc_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_loc_args: Option<Vec<String>>,
}

impl Notification {
    /// Create a notification with a title and body
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            body: Some(body.into()),
            ..Default::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn with_sound(mut self, sound: impl Into<String>) -> Self {
        self.sound = Some(sound.into());
        self
    }

    /// Badge shown on the app icon (iOS)
    pub fn with_badge(mut self, badge: impl Into<String>) -> Self {
        self.badge = Some(badge.into());
        self
    }

    /// Notifications sharing a tag replace each other in the drawer (Android)
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    /// Icon color in `#rrggbb` format (Android)
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn with_click_action(mut self, click_action: impl Into<String>) -> Self {
        self.click_action = Some(click_action.into());
        self
    }

    pub fn with_body_loc(mut self, key: impl Into<String>, args: Vec<String>) -> Self {
        self.body_loc_key = Some(key.into());
        self.body_loc_args = Some(args);
        self
    }

    pub fn with_title_loc(mut self, key: impl Into<String>, args: Vec<String>) -> Self {
        self.title_loc_key = Some(key.into());
        self.title_loc_args = Some(args);
        self
    }
}

/// Pre-encrypted Web Push payload and the headers that describe it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncryptedPayload {
    pub body: Vec<u8>,
    pub encryption: String,
    pub crypto_key: String,
    pub content_encoding: String,
}

impl EncryptedPayload {
    /// Record a payload the way callers of the legacy API hand it over.
    ///
    /// The `Encryption` header carries `crypto_key` and the `Crypto-Key` header
    /// carries `encryption`. Callers depend on this mapping.
    pub fn new(
        body: Vec<u8>,
        crypto_key: impl Into<String>,
        encryption: impl Into<String>,
        content_encoding: impl Into<String>,
    ) -> Self {
        Self {
            body,
            encryption: crypto_key.into(),
            crypto_key: encryption.into(),
            content_encoding: content_encoding.into(),
        }
    }

    /// Header name/value pairs to merge into the request
    pub fn headers(&self) -> [(&'static str, &str); 4] {
        [
            ("Encryption", self.encryption.as_str()),
            ("Crypto-Key", self.crypto_key.as_str()),
            ("Content-Encoding", self.content_encoding.as_str()),
            ("TTL", ENCRYPTED_TTL),
        ]
    }
}
