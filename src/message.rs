use serde_json::{Map, Value};

use crate::errors::{FcmError, Result};
use crate::models::{
    EncryptedPayload, Notification, Priority, Recipient, RecipientKind, DEFAULT_CONTENT_ENCODING,
};

/// FCM legacy message
///
/// Accumulates notification content, delivery options and recipients, then
/// renders the JSON body expected by the legacy `/fcm/send` endpoint.
///
/// ```
/// use fcm_legacy::{Message, Priority, Recipient};
///
/// let message = Message::new()
///     .add_recipient(Recipient::topic("news"))?
///     .with_priority(Priority::Normal)
///     .with_data_entry("k", "v");
///
/// assert_eq!(
///     message.to_json_string()?,
///     r#"{"to":"/topics/news","data":{"k":"v"},"priority":"normal"}"#
/// );
/// # Ok::<(), fcm_legacy::FcmError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Message {
    notification: Option<Notification>,
    collapse_key: Option<String>,
    priority: Priority,
    data: Option<Map<String, Value>>,
    recipients: Vec<Recipient>,
    time_to_live: Option<u32>,
    delay_while_idle: Option<bool>,
    encrypted: Option<EncryptedPayload>,
}

impl Message {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a target to the message
    ///
    /// All recipients must be of the same kind, and a device message can only
    /// have a single recipient. Use [`Message::push_recipient`] to keep the
    /// message when a recipient is rejected.
    pub fn add_recipient(mut self, recipient: Recipient) -> Result<Self> {
        self.push_recipient(recipient)?;
        Ok(self)
    }

    /// Add a target in place; a rejected recipient leaves the message unchanged
    pub fn push_recipient(&mut self, recipient: Recipient) -> Result<&mut Self> {
        if let Some(kind) = self.recipient_kind() {
            if kind != recipient.kind() {
                return Err(FcmError::Validation(
                    "mixed recipient types are not supported by FCM".to_string(),
                ));
            }
            if kind == RecipientKind::Device {
                return Err(FcmError::Validation(
                    "a device message can only have one recipient".to_string(),
                ));
            }
        }

        self.recipients.push(recipient);
        Ok(self)
    }

    pub fn with_notification(mut self, notification: Notification) -> Self {
        self.notification = Some(notification);
        self
    }

    /// Messages with the same collapse key replace each other while undelivered
    pub fn with_collapse_key(mut self, collapse_key: impl Into<String>) -> Self {
        self.collapse_key = Some(collapse_key.into());
        self
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Replace the custom key/value payload
    pub fn with_data(mut self, data: Map<String, Value>) -> Self {
        self.data = Some(data);
        self
    }

    pub fn with_data_entry(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.data
            .get_or_insert_with(Map::new)
            .insert(key.into(), value.into());
        self
    }

    /// Seconds FCM keeps the message while the device is offline
    pub fn with_time_to_live(mut self, seconds: u32) -> Self {
        self.time_to_live = Some(seconds);
        self
    }

    pub fn with_delay_while_idle(mut self, delay_while_idle: bool) -> Self {
        self.delay_while_idle = Some(delay_while_idle);
        self
    }

    /// Switch to encrypted mode with the default `aesgcm` content encoding
    ///
    /// The body becomes `payload` as-is and the JSON fields are not sent.
    pub fn with_encrypted_data(
        self,
        payload: impl Into<Vec<u8>>,
        crypto_key: impl Into<String>,
        encryption: impl Into<String>,
    ) -> Self {
        self.with_encrypted_data_encoded(payload, crypto_key, encryption, DEFAULT_CONTENT_ENCODING)
    }

    pub fn with_encrypted_data_encoded(
        mut self,
        payload: impl Into<Vec<u8>>,
        crypto_key: impl Into<String>,
        encryption: impl Into<String>,
        content_encoding: impl Into<String>,
    ) -> Self {
        self.encrypted = Some(EncryptedPayload::new(
            payload.into(),
            crypto_key,
            encryption,
            content_encoding,
        ));
        self
    }

    pub fn recipients(&self) -> &[Recipient] {
        &self.recipients
    }

    /// Kind shared by all recipients, `None` until the first one is added
    pub fn recipient_kind(&self) -> Option<RecipientKind> {
        self.recipients.first().map(Recipient::kind)
    }

    pub fn priority(&self) -> Priority {
        self.priority
    }

    pub fn encrypted_payload(&self) -> Option<&EncryptedPayload> {
        self.encrypted.as_ref()
    }

    pub fn is_encrypted(&self) -> bool {
        self.encrypted.is_some()
    }

    /// Render the request body
    ///
    /// Keys are emitted in this order, each only when set: target (`to` or
    /// `condition`), `collapse_key`, `data` (skipped when empty), `priority`,
    /// `notification`, `time_to_live`, `delay_while_idle`.
    pub fn to_json(&self) -> Result<Value> {
        if self.recipients.is_empty() {
            return Err(FcmError::EmptyRecipients);
        }

        let mut body = Map::new();

        if let Some((field, target)) = self.target() {
            body.insert(field.to_string(), Value::String(target));
        }
        if let Some(collapse_key) = &self.collapse_key {
            body.insert("collapse_key".to_string(), Value::String(collapse_key.clone()));
        }
        if let Some(data) = self.data.as_ref().filter(|data| !data.is_empty()) {
            body.insert("data".to_string(), Value::Object(data.clone()));
        }
        body.insert(
            "priority".to_string(),
            Value::String(self.priority.as_str().to_string()),
        );
        if let Some(notification) = &self.notification {
            body.insert("notification".to_string(), serde_json::to_value(notification)?);
        }
        if let Some(ttl) = self.time_to_live {
            body.insert("time_to_live".to_string(), Value::from(ttl));
        }
        if let Some(delay_while_idle) = self.delay_while_idle {
            body.insert("delay_while_idle".to_string(), Value::Bool(delay_while_idle));
        }

        Ok(Value::Object(body))
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.to_json()?)?)
    }

    /// Target field name and value
    ///
    /// Several topics become an OR-condition over topic membership, in
    /// insertion order.
    fn target(&self) -> Option<(&'static str, String)> {
        match self.recipients.as_slice() {
            [Recipient::Topic(name)] => Some(("to", format!("/topics/{}", name))),
            [Recipient::Device(token)] => Some(("to", token.clone())),
            topics @ [Recipient::Topic(_), _, ..] => {
                let condition = topics
                    .iter()
                    .map(|topic| format!("'{}' in topics", topic.identifier()))
                    .collect::<Vec<_>>()
                    .join(" || ");
                Some(("condition", condition))
            }
            _ => None,
        }
    }
}
