//! Tailwind class tables for every page and component.
//!
//! Only constants and small selectors live here; markup composes them.

#[cfg(test)]
#[path = "styles_test.rs"]
mod styles_test;

use crate::net::types::QuestionSetStatus;

// =============================================================
// Auth forms
// =============================================================

pub const CENTER_SCREEN: &str = "min-h-screen flex items-center justify-center px-4";
pub const CARD_CONTAINER: &str = "w-full max-w-md bg-white shadow-xl rounded-3xl p-6 sm:p-8 transition-all duration-300 ease-in-out hover:-translate-y-2 hover:shadow-2xl";
pub const CARD_HEADING: &str = "text-center mb-6 font-semibold text-gray-800 text-2xl";
pub const FORM_LAYOUT: &str = "flex flex-col gap-4";
pub const FULL_WIDTH: &str = "w-full";
pub const INPUT_CLASS: &str = "w-full px-3 py-2 border border-gray-300 bg-white rounded-lg shadow-sm focus:outline-none focus:ring-2 focus:ring-indigo-500 focus:border-indigo-500";
pub const INPUT_LABEL: &str = "block mb-1 text-sm font-medium text-gray-700";
pub const PASSWORD_TOGGLE: &str = "absolute inset-y-0 right-0 px-3 text-sm text-gray-500 hover:text-gray-700";
pub const PRIMARY_BUTTON: &str = "w-full bg-gradient-to-r from-indigo-500 to-purple-500 text-white font-semibold py-2 rounded-lg shadow-md hover:from-indigo-600 hover:to-purple-600 transition-all disabled:opacity-60";
pub const ERROR_TEXT: &str = "text-red-600 text-sm text-center mt-2";
pub const SUCCESS_TEXT: &str = "text-green-600 text-sm text-center mt-2";
pub const AUTH_SWITCH_TEXT: &str = "text-center text-sm text-gray-600 mt-4";
pub const AUTH_SWITCH_LINK: &str = "text-indigo-600 font-semibold hover:underline";

// =============================================================
// Landing
// =============================================================

pub const LANDING_PAGE: &str = "min-h-screen flex flex-col items-center justify-center pt-16";
pub const LANDING_HEADING: &str = "text-white font-extrabold mb-3 text-3xl sm:text-5xl text-center";
pub const LANDING_SUB_HEADING: &str = "text-white/80 mb-6 text-center text-sm sm:text-base";
pub const LANDING_GRADIENT_BUTTON: &str = "w-full sm:w-auto bg-gradient-to-r from-indigo-500 to-purple-500 text-white px-6 py-3 rounded-full font-semibold shadow-md hover:from-indigo-600 hover:to-purple-600 transition-all";
pub const LANDING_FEATURES_GRID: &str = "px-4 py-8 sm:p-10 grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-4 sm:gap-6 pb-16 sm:pb-20 place-items-stretch";
pub const FEATURE_CARD: &str = "w-full flex flex-col items-center text-center p-5 sm:p-6 rounded-2xl border border-white/30 backdrop-blur-md bg-white/10 transition-all duration-500 ease-in-out hover:scale-105 hover:shadow-2xl cursor-pointer";
pub const FEATURE_ICON: &str = "text-3xl sm:text-4xl mb-3 sm:mb-4";
pub const FEATURE_TITLE: &str = "text-white font-semibold mb-1 sm:mb-2 text-base sm:text-lg";
pub const FEATURE_DESC: &str = "text-white/80 text-sm sm:text-base";

// =============================================================
// Chrome
// =============================================================

pub const LANDING_NAVBAR: &str = "bg-white/10 backdrop-blur-md rounded-b-xl shadow-none p-2";
pub const NAVBAR_INNER: &str = "max-w-7xl mx-auto flex items-center justify-between px-2";
pub const NAVBAR_BRAND: &str = "text-white text-xl font-bold";
pub const NAVBAR_LINKS: &str = "hidden sm:flex items-center gap-4";
pub const LANDING_NAVBAR_BUTTON: &str = "text-white capitalize font-semibold";
pub const NAVBAR_AVATAR: &str = "w-8 h-8 rounded-full bg-indigo-500 text-white flex items-center justify-center font-bold";
pub const NAVBAR_EMAIL: &str = "text-white/90 text-sm";
pub const MENU_TOGGLE: &str = "sm:hidden text-white text-2xl";
pub const MOBILE_MENU_BASE: &str = "text-left flex flex-col sm:hidden gap-2 p-4 transform transition-all duration-300 ease-in-out origin-left w-full";
pub const MOBILE_MENU_OPEN: &str = "scale-x-100 opacity-100";
pub const MOBILE_MENU_CLOSED: &str = "scale-x-0 opacity-0 pointer-events-none";
pub const FOOTER_BASE: &str = "w-full bg-gray-900 text-gray-300 py-6 mt-10";
pub const FOOTER_CONTAINER: &str = "max-w-7xl mx-auto px-4 flex flex-col sm:flex-row justify-between items-center gap-4";
pub const FOOTER_LINK: &str = "hover:underline text-sm";
pub const NOT_FOUND_PAGE: &str = "min-h-screen flex flex-col items-center justify-center text-center gap-4";
pub const NOT_FOUND_CODE: &str = "text-6xl font-extrabold text-white";

// =============================================================
// Question sets
// =============================================================

pub const QUESTION_SETS_PAGE: &str = "min-h-screen bg-gradient-to-br from-purple-50 to-blue-50 p-4 sm:p-6";
pub const QUESTION_SETS_CONTAINER: &str = "max-w-7xl mx-auto";
pub const QUESTION_SETS_HEADER: &str = "mb-8";
pub const QUESTION_SETS_TITLE: &str = "font-bold text-gray-800 mb-2 text-3xl";
pub const QUESTION_SETS_SUBTITLE: &str = "text-gray-600";
pub const QUESTION_SETS_GRID: &str = "grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-4 sm:gap-6 mb-8";
pub const QUESTION_SET_CARD: &str = "h-full bg-white p-4 shadow hover:shadow-lg transition-shadow cursor-pointer rounded-lg";
pub const QUESTION_SET_CARD_CONTENT: &str = "h-full flex flex-col";
pub const QUESTION_SET_CARD_HEADER: &str = "flex flex-col sm:flex-row justify-between items-start sm:items-center gap-2 mb-3";
pub const QUESTION_SET_CARD_TITLE: &str = "font-semibold text-gray-800";
pub const QUESTION_SET_CARD_BODY: &str = "text-gray-600 mb-2 flex-grow";
pub const QUESTION_SET_CARD_BUTTON: &str = "mt-2 px-3 py-1 rounded-md border border-purple-600 text-purple-700 text-sm hover:bg-purple-50";
pub const QUESTION_SETS_EMPTY_STATE: &str = "text-center py-12";
pub const QUESTION_SETS_EMPTY_TITLE: &str = "text-gray-500 mb-4";
pub const QUESTION_SETS_DIALOG_BACKDROP: &str = "fixed inset-0 bg-black/40 flex items-center justify-center z-50";
pub const QUESTION_SETS_DIALOG: &str = "bg-white rounded-xl shadow-xl w-full max-w-md p-6";
pub const QUESTION_SETS_DIALOG_CONTENT: &str = "space-y-4 pt-2";
pub const QUESTION_SETS_DIALOG_ACTIONS: &str = "flex justify-end gap-2 pt-4";
pub const QUESTION_SETS_FAB: &str = "fixed bottom-6 right-6 w-14 h-14 rounded-full text-white text-3xl shadow-lg bg-gradient-to-r from-purple-600 to-blue-600";
pub const STATUS_CHIP_DRAFT: &str = "bg-yellow-100 text-yellow-800";
pub const STATUS_CHIP_PUBLISHED: &str = "bg-green-100 text-green-800";

// =============================================================
// Questions
// =============================================================

pub const QUESTIONS_PAGE: &str = "min-h-screen bg-gradient-to-br from-purple-50 to-blue-50 p-4 sm:p-6";
pub const QUESTIONS_CONTAINER: &str = "max-w-7xl mx-auto";
pub const QUESTIONS_HEADER: &str = "mb-8";
pub const QUESTIONS_TITLE: &str = "font-bold text-gray-800 mb-2 text-3xl";
pub const QUESTIONS_SUBTITLE: &str = "text-gray-600";
pub const QUESTIONS_FILTERS_CONTAINER: &str = "mb-6 bg-white rounded-lg p-4 shadow-sm";
pub const QUESTIONS_FILTERS_GRID: &str = "grid grid-cols-1 md:grid-cols-4 gap-4";
pub const QUESTIONS_FILTERS_COUNT: &str = "flex items-center";
pub const QUESTIONS_FILTERS_COUNT_TEXT: &str = "text-gray-600";
pub const QUESTIONS_LIST: &str = "space-y-4 mb-8";
pub const QUESTION_CARD: &str = "bg-white rounded-lg p-4 shadow-sm hover:shadow-md transition-shadow";
pub const QUESTION_CARD_HEADER: &str = "flex flex-col sm:flex-row justify-between gap-3 sm:gap-2 items-start sm:items-center mb-3";
pub const QUESTION_CARD_TITLE: &str = "font-semibold text-gray-800 flex-grow w-full";
pub const QUESTION_CARD_BODY: &str = "text-gray-600 mb-4";
pub const QUESTION_CARD_TAGS: &str = "flex flex-wrap gap-2";
pub const QUESTIONS_EMPTY_STATE: &str = "text-center py-12";
pub const QUESTIONS_EMPTY_TITLE: &str = "text-gray-500 mb-4";
pub const QUESTIONS_PAGINATION: &str = "flex justify-center gap-1";
pub const PAGE_BUTTON: &str = "min-w-9 h-9 px-2 rounded-full text-sm text-gray-700 hover:bg-purple-100";
pub const PAGE_BUTTON_ACTIVE: &str = "min-w-9 h-9 px-2 rounded-full text-sm text-white bg-purple-600";

pub const DIFFICULTY_EASY: &str = "bg-green-100 text-green-700";
pub const DIFFICULTY_MEDIUM: &str = "bg-yellow-100 text-yellow-700";
pub const DIFFICULTY_HARD: &str = "bg-red-100 text-red-700";
pub const DIFFICULTY_DEFAULT: &str = "bg-gray-100 text-gray-700";

pub const TAG_CATEGORY: &str = "bg-blue-100 text-blue-700";
pub const TAG_DEFAULT: &str = "bg-gray-100 text-gray-700";
pub const TAG_MORE: &str = "bg-gray-100 text-gray-500";
pub const CHIP_BASE: &str = "inline-flex items-center px-2.5 py-0.5 rounded-full text-xs font-medium";

// =============================================================
// Shared
// =============================================================

pub const GRADIENT_BUTTON: &str = "px-4 py-2 rounded-lg text-white bg-gradient-to-r from-purple-600 to-blue-600";
pub const GRADIENT_BUTTON_HOVER: &str = "px-4 py-2 rounded-lg bg-gradient-to-r from-purple-600 to-blue-600 text-white hover:from-purple-700 hover:to-blue-700 disabled:opacity-60";
pub const OUTLINE_BUTTON: &str = "px-4 py-2 rounded-lg border border-gray-300 text-gray-700 hover:bg-gray-50";
pub const LOADING_CONTAINER: &str = "flex justify-center items-center min-h-screen";
pub const PROGRESS_TRACK: &str = "w-full bg-gray-200 rounded-full overflow-hidden";

// =============================================================
// Dashboard
// =============================================================

pub const DASHBOARD_PAGE: &str = "min-h-screen bg-gradient-to-br from-indigo-50 via-purple-50 to-blue-50 p-4 sm:p-6";
pub const DASHBOARD_CONTAINER: &str = "max-w-7xl mx-auto";
pub const DASHBOARD_WELCOME_CARD: &str = "mb-8 p-6 bg-white/80 backdrop-blur-sm shadow-lg rounded-2xl border border-white/20";
pub const DASHBOARD_WELCOME_CONTENT: &str = "flex flex-col md:flex-row gap-4 md:gap-0 justify-between items-start md:items-center";
pub const DASHBOARD_WELCOME_TEXT: &str = "font-bold text-3xl text-gray-800 mb-2 bg-gradient-to-r from-indigo-600 to-purple-600 bg-clip-text text-transparent";
pub const DASHBOARD_WELCOME_SUBTEXT: &str = "text-gray-600";
pub const DASHBOARD_METRICS_GRID: &str = "grid grid-cols-1 md:grid-cols-2 gap-4 sm:gap-6 mb-8";
pub const DASHBOARD_METRIC_CARD: &str = "p-6 bg-gradient-to-r from-indigo-500 to-purple-500 text-white shadow-xl rounded-2xl border border-white/20 hover:shadow-2xl transition-all duration-300 hover:scale-105";
pub const DASHBOARD_METRIC_CONTENT: &str = "flex items-center justify-between";
pub const DASHBOARD_METRIC_NUMBER: &str = "font-bold mb-2 text-4xl";
pub const DASHBOARD_METRIC_LABEL: &str = "opacity-90 text-lg";
pub const DASHBOARD_METRIC_ICON: &str = "text-5xl opacity-80";
pub const DASHBOARD_LOW_SCORE_SECTION: &str = "mb-8 p-6 bg-white/80 backdrop-blur-sm shadow-lg rounded-2xl border border-white/20";
pub const DASHBOARD_LOW_SCORE_HEADER: &str = "flex flex-col sm:flex-row items-start sm:items-center justify-between gap-3 mb-6";
pub const DASHBOARD_LOW_SCORE_TITLE: &str = "font-bold text-gray-800 text-xl";
pub const DASHBOARD_LOW_SCORE_LIST: &str = "space-y-4";
pub const DASHBOARD_LOW_SCORE_CARD: &str = "p-4 hover:shadow-xl transition-all duration-300 bg-white/60 backdrop-blur-sm rounded-xl border border-gray-100 hover:border-purple-200";
pub const DASHBOARD_LOW_SCORE_CARD_CONTENT: &str = "flex flex-col md:flex-row gap-4 md:gap-0 justify-between items-start md:items-start";
pub const DASHBOARD_LOW_SCORE_QUESTION_TEXT: &str = "font-semibold text-gray-800 mb-2 text-lg";
pub const DASHBOARD_LOW_SCORE_META: &str = "flex flex-wrap items-center gap-2 sm:gap-4 mb-3";
pub const DASHBOARD_LOW_SCORE_DATE: &str = "text-gray-600 text-sm";
pub const DASHBOARD_LOW_SCORE_EMPTY: &str = "text-center py-12";
pub const DASHBOARD_LOW_SCORE_EMPTY_ICON: &str = "text-6xl text-green-400 mb-4";
pub const DASHBOARD_LOW_SCORE_EMPTY_TITLE: &str = "text-gray-500 mb-2 text-xl";
pub const DASHBOARD_LOW_SCORE_EMPTY_SUBTEXT: &str = "text-gray-400";
pub const DASHBOARD_QUICK_ACTIONS: &str = "mb-4";
pub const DASHBOARD_QUICK_ACTIONS_TITLE: &str = "font-bold text-gray-800 mb-4 text-xl";
pub const DASHBOARD_QUICK_ACTIONS_GRID: &str = "grid grid-cols-1 md:grid-cols-3 gap-4 sm:gap-6";
pub const DASHBOARD_QUICK_ACTION_CARD: &str = "bg-gradient-to-br from-blue-50 to-blue-100 hover:from-blue-100 hover:to-blue-200 cursor-pointer transition-all duration-300 rounded-2xl border border-blue-200 hover:border-blue-300 hover:shadow-xl hover:scale-105";
pub const DASHBOARD_QUICK_ACTION_CARD_PURPLE: &str = "bg-gradient-to-br from-purple-50 to-purple-100 hover:from-purple-100 hover:to-purple-200 cursor-pointer transition-all duration-300 rounded-2xl border border-purple-200 hover:border-purple-300 hover:shadow-xl hover:scale-105";
pub const DASHBOARD_QUICK_ACTION_CARD_GREEN: &str = "bg-gradient-to-br from-green-50 to-green-100 hover:from-green-100 hover:to-green-200 cursor-pointer transition-all duration-300 rounded-2xl border border-green-200 hover:border-green-300 hover:shadow-xl hover:scale-105";
pub const DASHBOARD_QUICK_ACTION_CONTENT: &str = "text-center p-6";
pub const DASHBOARD_QUICK_ACTION_ICON: &str = "text-4xl text-blue-600 mb-3";
pub const DASHBOARD_QUICK_ACTION_ICON_PURPLE: &str = "text-4xl text-purple-600 mb-3";
pub const DASHBOARD_QUICK_ACTION_ICON_GREEN: &str = "text-4xl text-green-600 mb-3";
pub const DASHBOARD_QUICK_ACTION_TITLE: &str = "font-semibold text-blue-800 text-lg";
pub const DASHBOARD_QUICK_ACTION_TITLE_PURPLE: &str = "font-semibold text-purple-800 text-lg";
pub const DASHBOARD_QUICK_ACTION_TITLE_GREEN: &str = "font-semibold text-green-800 text-lg";
pub const DASHBOARD_QUICK_ACTION_SUBTEXT: &str = "text-blue-600";
pub const DASHBOARD_QUICK_ACTION_SUBTEXT_PURPLE: &str = "text-purple-600";
pub const DASHBOARD_QUICK_ACTION_SUBTEXT_GREEN: &str = "text-green-600";

// =============================================================
// Answer
// =============================================================

pub const ANSWER_PAGE: &str = "min-h-screen bg-gradient-to-br from-indigo-50 via-purple-50 to-blue-50 p-4 sm:p-6";
pub const ANSWER_CONTAINER: &str = "max-w-7xl mx-auto";
pub const ANSWER_HEADER: &str = "mb-8";
pub const ANSWER_TITLE: &str = "font-bold text-gray-800 mb-2 bg-gradient-to-r from-indigo-600 to-purple-600 bg-clip-text text-transparent text-2xl sm:text-3xl";
pub const ANSWER_GRID: &str = "grid grid-cols-1 lg:grid-cols-2 gap-4 sm:gap-8";
pub const ANSWER_QUESTION_CARD: &str = "bg-white/80 backdrop-blur-sm shadow-lg rounded-2xl border border-white/20 p-4 sm:p-6";
pub const ANSWER_QUESTION_TITLE: &str = "font-semibold text-gray-800 mb-3 text-lg";
pub const ANSWER_QUESTION_TEXT: &str = "text-gray-700 mb-6 text-base leading-relaxed";
pub const ANSWER_INPUT_FIELD: &str = "mb-4 w-full min-h-40 p-3 border border-gray-300 rounded-lg focus:outline-none focus:ring-2 focus:ring-indigo-500";
pub const ANSWER_SUBMIT_BUTTON: &str = "mb-4 bg-gradient-to-r from-indigo-500 to-purple-500 hover:from-indigo-600 hover:to-purple-600 text-white font-semibold py-3 px-6 rounded-xl shadow-lg hover:shadow-xl transition-all duration-300 disabled:opacity-60";
pub const ANSWER_ERROR_TEXT: &str = "mt-3 text-rose-600 bg-rose-50 p-3 rounded-lg border border-rose-200";
pub const ANSWER_FEEDBACK_CARD: &str = "bg-white/80 backdrop-blur-sm shadow-lg rounded-2xl border border-white/20 p-4 sm:p-6";
pub const ANSWER_FEEDBACK_TITLE: &str = "font-semibold text-gray-800 mb-4 text-lg";
pub const ANSWER_SCORE_SECTION: &str = "mb-6 p-4 bg-gradient-to-r from-indigo-50 to-purple-50 rounded-xl border border-indigo-100";
pub const ANSWER_SCORE_HEADER: &str = "flex flex-col sm:flex-row gap-3 sm:gap-0 justify-between items-start sm:items-center mb-3";
pub const ANSWER_SCORE_LABEL: &str = "font-semibold text-gray-800";
pub const ANSWER_SCORE_PROGRESS: &str = "h-2.5 rounded-md";
pub const ANSWER_DIVIDER: &str = "my-4 border-gray-200";
pub const ANSWER_BREAKDOWN_TITLE: &str = "font-semibold text-gray-800 mb-4 text-lg";
pub const ANSWER_BREAKDOWN_ITEM: &str = "mb-4 p-3 bg-white rounded-lg border border-gray-100";
pub const ANSWER_BREAKDOWN_HEADER: &str = "flex justify-between mb-2";
pub const ANSWER_BREAKDOWN_LABEL: &str = "font-medium text-gray-700";
pub const ANSWER_BREAKDOWN_VALUE: &str = "font-semibold text-gray-800";
pub const ANSWER_BREAKDOWN_PROGRESS: &str = "h-2 rounded";
pub const ANSWER_AI_SECTION: &str = "font-semibold text-gray-800 mb-3 text-lg";
pub const ANSWER_AI_FEEDBACK: &str = "p-4 bg-gradient-to-r from-amber-50 to-orange-50 rounded-xl border border-amber-200 mb-4";
pub const ANSWER_AI_TEXT: &str = "text-gray-700 leading-relaxed";
pub const ANSWER_REATTEMPT_BUTTON: &str = "w-full bg-gradient-to-r from-emerald-500 to-teal-500 hover:from-emerald-600 hover:to-teal-600 text-white font-semibold py-3 px-6 rounded-xl shadow-lg hover:shadow-xl transition-all duration-300";

/// Colour family for a 0-10 score.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScoreTone {
    Success,
    Warning,
    Error,
}

impl ScoreTone {
    pub fn for_score(score: u32) -> Self {
        match score {
            8.. => Self::Success,
            6..=7 => Self::Warning,
            _ => Self::Error,
        }
    }

    pub fn chip_class(self) -> &'static str {
        match self {
            Self::Success => "bg-green-100 text-green-800",
            Self::Warning => "bg-amber-100 text-amber-800",
            Self::Error => "bg-rose-100 text-rose-800",
        }
    }

    pub fn bar_class(self) -> &'static str {
        match self {
            Self::Success => "bg-emerald-500",
            Self::Warning => "bg-amber-500",
            Self::Error => "bg-rose-500",
        }
    }

    pub fn text_class(self) -> &'static str {
        match self {
            Self::Success => "text-emerald-600",
            Self::Warning => "text-amber-600",
            Self::Error => "text-rose-600",
        }
    }
}

/// Chip classes for a difficulty string; unknown values get the neutral chip.
pub fn difficulty_chip(difficulty: &str) -> &'static str {
    match difficulty {
        "Easy" | "EASY" => DIFFICULTY_EASY,
        "Medium" | "MEDIUM" => DIFFICULTY_MEDIUM,
        "Hard" | "HARD" => DIFFICULTY_HARD,
        _ => DIFFICULTY_DEFAULT,
    }
}

pub fn status_chip(status: QuestionSetStatus) -> &'static str {
    match status {
        QuestionSetStatus::Draft => STATUS_CHIP_DRAFT,
        QuestionSetStatus::Published => STATUS_CHIP_PUBLISHED,
    }
}

/// Join a chip base with a colour variant.
pub fn chip(variant: &str) -> String {
    format!("{CHIP_BASE} {variant}")
}
