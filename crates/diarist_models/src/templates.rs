//! Fixed text used by the local generator.

/// Diary body templates with `{episode}` and `{character}` slots.
pub const DIARY_TEMPLATES: [&str; 10] = [
    "今日は{episode}の事件を解決した。{character}が犯人だったとは思わなかった。",
    "{episode}の事件で{character}が活躍していた。さすがだ。",
    "{episode}の事件は複雑だったが、{character}の協力で解決できた。",
    "今日も{episode}の事件に巻き込まれた。{character}の推理が鋭い。",
    "{episode}の事件で{character}が怪しい動きをしていた。",
    "{episode}の事件は{character}の証言が決め手になった。",
    "今日は{episode}の事件で{character}と一緒に捜査した。",
    "{episode}の事件は{character}の行動が謎だった。",
    "{episode}の事件で{character}が重要な手がかりを見つけた。",
    "{episode}の事件は{character}の推理で真相が明らかになった。",
];

/// Episode used when none is known.
pub const UNKNOWN_EPISODE: &str = "謎の事件";

/// Character used when none is known.
pub const UNKNOWN_CHARACTER: &str = "謎の人物";

// Checked in order; a later match replaces an earlier one.
const CHARACTER_KEYWORDS: [(&str, &str); 4] = [
    ("コナン", "江戸川コナン"),
    ("蘭", "毛利蘭"),
    ("小五郎", "毛利小五郎"),
    ("博士", "阿笠博士"),
];

// Appended in order, each at most once.
const PROMPT_SUFFIXES: [(&str, &str); 3] = [
    ("推理", " 推理が冴えていた一日だった。"),
    ("事件", " 事件解決に集中できた。"),
    ("捜査", " 捜査が順調に進んだ。"),
];

/// Character named by keyword in `prompt`, or [`UNKNOWN_CHARACTER`].
///
/// # Examples
///
/// ```
/// use diarist_models::character_from_prompt;
///
/// assert_eq!(character_from_prompt("コナンと蘭が出かけた"), "毛利蘭");
/// assert_eq!(character_from_prompt("雨の日"), "謎の人物");
/// ```
pub fn character_from_prompt(prompt: &str) -> &'static str {
    CHARACTER_KEYWORDS
        .iter()
        .filter(|(keyword, _)| prompt.contains(keyword))
        .map(|(_, name)| *name)
        .last()
        .unwrap_or(UNKNOWN_CHARACTER)
}

/// Fill a template's slots.
pub fn render_template(template: &str, episode: &str, character: &str) -> String {
    template
        .replace("{episode}", episode)
        .replace("{character}", character)
}

/// Append the fixed sentence for each keyword found in `prompt`.
///
/// # Examples
///
/// ```
/// use diarist_models::append_suffixes;
///
/// let body = append_suffixes("本文。".to_string(), "事件の推理");
/// assert_eq!(body, "本文。 推理が冴えていた一日だった。 事件解決に集中できた。");
/// ```
pub fn append_suffixes(mut body: String, prompt: &str) -> String {
    for (keyword, suffix) in PROMPT_SUFFIXES {
        if prompt.contains(keyword) {
            body.push_str(suffix);
        }
    }
    body
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_keyword_wins() {
        assert_eq!(character_from_prompt("博士とコナン"), "阿笠博士");
        assert_eq!(character_from_prompt("小五郎のおじさん"), "毛利小五郎");
        assert_eq!(character_from_prompt("コナン"), "江戸川コナン");
    }

    #[test]
    fn every_template_has_both_slots() {
        for template in DIARY_TEMPLATES {
            let rendered = render_template(template, "E", "C");
            assert!(!rendered.contains('{'), "unfilled slot in {}", template);
            assert!(rendered.contains('E') && rendered.contains('C'));
        }
    }

    #[test]
    fn no_suffix_without_keyword() {
        assert_eq!(append_suffixes("本文".to_string(), "雨の日"), "本文");
    }
}
