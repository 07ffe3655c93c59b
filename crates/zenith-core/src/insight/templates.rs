//! Canned report text, keyed by the threshold that selects it.

pub const SUMMARY_STRAINED: &str =
    "Your recent entries indicate some friction and stress patterns. You might be taking on too much.";
pub const SUMMARY_RESILIENT: &str =
    "You are showing good emotional resilience and positivity in your writing.";

pub const INSIGHT_SOLID_WORKFLOW: &str =
    "You are maintaining a solid workflow and clearing tasks effectively.";
pub const INSIGHT_PENDING_ITEMS: &str =
    "You have several pending items. Consider focusing on one major task per day.";

pub const AREA_STRESS_MANAGEMENT: &str = "Stress Management";
pub const AREA_GOAL_SETTING: &str = "Goal Setting";
pub const AREA_TASK_PRIORITIZATION: &str = "Task prioritization";
pub const AREA_SKILL_MASTERY: &str = "Skill Mastery";
pub const AREA_MINDFULNESS: &str = "Mindfulness";

pub const TIP_BREATHING_BREAK: &str = "Take a 5-minute breathing break every 2 hours.";
pub const TIP_REFLECT_ON_WINS: &str = "Reflect on your wins at the end of the day.";
pub const TIP_POMODORO: &str = "Use the Pomodoro technique (25m work / 5m break).";
pub const TIP_PLAN_AHEAD: &str = "Plan your next day the night before.";

pub const ENCOURAGE_BE_KIND: &str = "Remember, progress is not linear. Be kind to yourself today.";
pub const ENCOURAGE_ON_A_ROLL: &str = "You're on a roll! Keep trusting your process.";

#[must_use]
pub const fn summary(strained: bool) -> &'static str {
    if strained { SUMMARY_STRAINED } else { SUMMARY_RESILIENT }
}

#[must_use]
pub const fn insight(above_sixty: bool) -> &'static str {
    if above_sixty { INSIGHT_SOLID_WORKFLOW } else { INSIGHT_PENDING_ITEMS }
}

#[must_use]
pub const fn focus_area(any_stress: bool) -> &'static str {
    if any_stress { AREA_STRESS_MANAGEMENT } else { AREA_GOAL_SETTING }
}

#[must_use]
pub const fn work_area(below_half: bool) -> &'static str {
    if below_half { AREA_TASK_PRIORITIZATION } else { AREA_SKILL_MASTERY }
}

#[must_use]
pub const fn wellbeing_tip(any_stress: bool) -> &'static str {
    if any_stress { TIP_BREATHING_BREAK } else { TIP_REFLECT_ON_WINS }
}

#[must_use]
pub const fn workflow_tip(below_sixty: bool) -> &'static str {
    if below_sixty { TIP_POMODORO } else { TIP_PLAN_AHEAD }
}

#[must_use]
pub const fn encouragement(any_stress: bool) -> &'static str {
    if any_stress { ENCOURAGE_BE_KIND } else { ENCOURAGE_ON_A_ROLL }
}
