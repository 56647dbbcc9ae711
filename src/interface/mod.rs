pub mod prompts;
pub mod render;

pub use prompts::{
    collect_profile, match_fruit, prompt_fruit_set, prompt_goal, prompt_portion,
    prompt_sweetness, prompt_yes_no,
};
pub use render::{display_bmi, display_order_list, display_recommendation, format_bmi};
