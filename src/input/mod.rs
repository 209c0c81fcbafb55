mod keymap;
mod source;

pub use keymap::{
    KeymapPreset, PromptKey, help_lines, hint_line, map_key_to_action,
    map_key_to_action_with_preset, map_prompt_key,
};
pub use source::{CrosstermKeySource, KeySource};
