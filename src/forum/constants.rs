//! Shared constants for the forum store and its command-line front end.

// =============================================================================
// Default Viewer Identity
// =============================================================================

/// Author id used when no viewer identity is configured.
pub const DEFAULT_VIEWER_ID: &str = "currentUser";

/// Display name used when no viewer identity is configured.
pub const DEFAULT_VIEWER_NAME: &str = "Anonymous Bison";

// =============================================================================
// Reaction Picker
// =============================================================================

/// Emoji offered by the reaction picker.
///
/// Reactions are not restricted to this list; any non-blank emoji value is
/// accepted by the store.
pub const EMOJI_PALETTE: &[&str] = &[
    "😀", "😃", "😄", "😁", "😊", "😍", "🥰", "😘", "😗", "😚", "😙", "😋", "😛", "😜", "🤪",
    "😝", "🤗", "🤔", "🤐", "🤨", "😐", "😑", "😶", "😏", "😒", "🙄", "😬", "🤥", "😔", "😪",
    "🤤", "😴", "😷", "🤒", "🤕", "🤢", "🤮", "🤧", "🥵", "🥶", "🥴", "😵", "🤯", "🤠", "🥳",
    "😎", "🤓", "🧐", "😕", "😟", "🙁", "☹️", "😮", "😯", "😲", "😳", "🥺", "😦", "😧", "😨",
    "😰", "😥", "😢", "😭", "😱", "😖", "😣", "😞", "😓", "😩", "😫", "🥱", "😤", "😡", "😠",
    "🤬", "😈", "👿", "💀", "☠️", "💩", "🤡", "👹", "👺", "👻", "👽", "👾", "🤖", "😺", "😸",
    "😹", "😻", "😼", "😽", "🙀", "😿", "😾", "❤️", "💛", "💚", "💙", "💜", "🖤", "🤍", "🤎",
    "💔", "❣️", "💕", "💖", "💗", "💘", "💝", "💟", "👍", "👎", "👌", "🤌", "🤏", "✌️", "🤞",
    "🤟", "🤘", "🤙", "👈", "👉", "👆", "🖕", "👇", "☝️", "👋", "🤚", "🖐️", "✋", "🖖", "👏",
    "🙌", "🤝", "🙏", "✊", "👊", "🤛", "🤜", "💪", "🦾", "🦿", "🦵", "🦶", "👂", "🦻", "👃",
    "🧠", "🫀", "🫁", "🦷", "🦴", "👀", "👁️", "👅", "👄", "💋",
];
