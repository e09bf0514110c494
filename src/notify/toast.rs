//! Toast rendering.
//!
//! Builds the typed descriptor handed to the native notifier, including the
//! base64-decoding convenience applied to inbound fields and the Windows
//! toast XML rendering.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;

/// Message value that marks a request as a silent ping. Compared
/// case-insensitively against the decoded message.
const SILENT_PING_MARKER: &str = "(null)";

/// Result of the base64-detection pass over an inbound field.
///
/// Senders may pre-encode title and message; decoding is a convenience, not
/// a requirement, so anything that does not decode cleanly to UTF-8 text is
/// kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodedField {
    Decoded(String),
    Literal(String),
}

impl DecodedField {
    /// Unwrap to the display string, whichever way it was produced.
    pub fn into_string(self) -> String {
        match self {
            DecodedField::Decoded(s) | DecodedField::Literal(s) => s,
        }
    }
}

/// Attempt to base64-decode a field as UTF-8 text.
pub fn decode_field(input: &str) -> DecodedField {
    match BASE64.decode(input) {
        Ok(bytes) => match String::from_utf8(bytes) {
            Ok(decoded) => DecodedField::Decoded(decoded),
            Err(_) => DecodedField::Literal(input.to_string()),
        },
        Err(_) => DecodedField::Literal(input.to_string()),
    }
}

/// How long the toast stays on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastDuration {
    Short,
    Long,
}

impl ToastDuration {
    pub fn as_str(&self) -> &'static str {
        match self {
            ToastDuration::Short => "short",
            ToastDuration::Long => "long",
        }
    }
}

/// Audio cue attached to a toast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioCue {
    /// Windows sound event name, without the `ms-winsoundevent:Notification.`
    /// prefix.
    pub event: String,
    pub looping: bool,
    pub silent: bool,
}

impl Default for AudioCue {
    fn default() -> Self {
        AudioCue { event: "Reminder".to_string(), looping: false, silent: false }
    }
}

/// The final toast descriptor handed to the native notifier.
///
/// Derived per dispatch and never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedToast {
    pub title: String,
    pub body: String,
    /// Device label shown as the `via <device>` attribution line.
    pub attribution: String,
    pub duration: ToastDuration,
    pub audio: AudioCue,
}

impl RenderedToast {
    /// Build a toast with the standard short duration and audible,
    /// non-looping cue.
    pub fn new(
        title: impl Into<String>,
        body: impl Into<String>,
        attribution: impl Into<String>,
    ) -> Self {
        RenderedToast {
            title: title.into(),
            body: body.into(),
            attribution: attribution.into(),
            duration: ToastDuration::Short,
            audio: AudioCue::default(),
        }
    }

    /// Whether this toast is a silent ping that must not be displayed.
    pub fn is_silent_ping(&self) -> bool {
        self.body.eq_ignore_ascii_case(SILENT_PING_MARKER)
    }

    /// Render the Windows toast XML descriptor.
    ///
    /// Text content is XML-escaped; the original receiver embedded fields
    /// verbatim, which broke on markup characters.
    pub fn to_xml(&self) -> String {
        format!(
            "<toast duration='{duration}'>\
             <audio src='ms-winsoundevent:Notification.{event}' loop='{looping}' silent='{silent}'/>\
             <visual><binding template='ToastText02'>\
             <text id=\"1\">{title}</text>\
             <text id=\"2\">{body}</text>\
             <text placement=\"attribution\">via {attribution}</text>\
             </binding></visual></toast>",
            duration = self.duration.as_str(),
            event = escape_xml(&self.audio.event),
            looping = self.audio.looping,
            silent = self.audio.silent,
            title = escape_xml(&self.title),
            body = escape_xml(&self.body),
            attribution = escape_xml(&self.attribution),
        )
    }
}

fn escape_xml(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            other => escaped.push(other),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base64_fields_are_decoded() {
        // "Hello" encoded
        assert_eq!(decode_field("SGVsbG8="), DecodedField::Decoded("Hello".to_string()));
    }

    #[test]
    fn decode_round_trips_ascii() {
        let original = "a plain ascii string";
        let encoded = BASE64.encode(original);

        assert_eq!(decode_field(&encoded), DecodedField::Decoded(original.to_string()));
    }

    #[test]
    fn non_base64_input_stays_literal() {
        assert_eq!(decode_field("Hello"), DecodedField::Literal("Hello".to_string()));
        assert_eq!(
            decode_field("not base64 at all!"),
            DecodedField::Literal("not base64 at all!".to_string())
        );
    }

    #[test]
    fn invalid_utf8_after_decode_stays_literal() {
        // 0xFF 0xFE is valid base64 payload but not valid UTF-8
        let encoded = BASE64.encode([0xFFu8, 0xFE]);
        assert_eq!(decode_field(&encoded), DecodedField::Literal(encoded.clone()));
    }

    #[test]
    fn silent_ping_marker_is_case_insensitive() {
        assert!(RenderedToast::new("t", "(null)", "d").is_silent_ping());
        assert!(RenderedToast::new("t", "(NULL)", "d").is_silent_ping());
        assert!(RenderedToast::new("t", "(Null)", "d").is_silent_ping());
        assert!(!RenderedToast::new("t", "null", "d").is_silent_ping());
        assert!(!RenderedToast::new("t", "a real message", "d").is_silent_ping());
    }

    #[test]
    fn xml_contains_fields_and_attribution() {
        let toast = RenderedToast::new("Title here", "Body here", "My iPhone");
        let xml = toast.to_xml();

        assert!(xml.contains("<text id=\"1\">Title here</text>"));
        assert!(xml.contains("<text id=\"2\">Body here</text>"));
        assert!(xml.contains("via My iPhone"));
        assert!(xml.contains("duration='short'"));
        assert!(xml.contains("ms-winsoundevent:Notification.Reminder"));
        assert!(xml.contains("loop='false'"));
        assert!(xml.contains("silent='false'"));
    }

    #[test]
    fn xml_escapes_markup_characters() {
        let toast = RenderedToast::new("<script>", "a & b \"quoted\"", "it's");
        let xml = toast.to_xml();

        assert!(xml.contains("&lt;script&gt;"));
        assert!(xml.contains("a &amp; b &quot;quoted&quot;"));
        assert!(xml.contains("it&apos;s"));
        assert!(!xml.contains("<script>"));
    }
}
