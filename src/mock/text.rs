//! Static word pools for zh_CN-flavored mock values.
//!
//! The pools mirror the vocabulary a live-streaming product would show:
//! Chinese names for anchors, short phrases for titles and tags, and the
//! fixed category set the frontend filters on.

/// Common Chinese surnames.
pub const SURNAMES: &[&str] = &[
    "王", "李", "张", "刘", "陈", "杨", "赵", "黄", "周", "吴", "徐", "孙", "胡", "朱", "高",
    "林", "何", "郭", "马", "罗",
];

/// Given names, one or two characters.
pub const GIVEN_NAMES: &[&str] = &[
    "伟", "芳", "娜", "敏", "静", "丽", "强", "磊", "军", "洋", "勇", "艳", "杰", "娟", "涛",
    "明", "超", "秀英", "晓燕", "志远", "雨桐", "子轩",
];

/// Short phrases used to assemble titles, tags, and descriptions.
pub const WORDS: &[&str] = &[
    "直播", "精彩", "游戏", "音乐", "舞蹈", "美食", "旅行", "户外", "挑战", "互动", "福利",
    "新人", "技术", "教学", "连麦", "排位", "开黑", "探店", "赛事", "日常", "深夜", "电台",
    "攻略", "测评", "首秀", "狂欢",
];

/// The fixed live-stream category set.
pub const CATEGORIES: &[&str] = &["游戏", "娱乐", "教育", "美食", "户外"];

/// ASCII fragments for login names and email local parts.
pub const USERNAME_WORDS: &[&str] = &[
    "chen", "lei", "wei", "fang", "jun", "yan", "tao", "ming", "xia", "qiang", "jing", "hua",
    "yu", "hao", "lin", "feng",
];

/// Email providers commonly seen in mainland accounts.
pub const EMAIL_DOMAINS: &[&str] = &[
    "example.com", "example.org", "163.com", "126.com", "qq.com", "gmail.com",
];

/// Mainland mobile number prefixes.
pub const PHONE_PREFIXES: &[&str] = &[
    "130", "131", "132", "133", "135", "136", "137", "138", "139", "150", "151", "152", "155",
    "157", "158", "159", "176", "177", "178", "180", "181", "182", "185", "186", "187", "188",
    "189",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categories_match_contract() {
        assert_eq!(CATEGORIES, &["游戏", "娱乐", "教育", "美食", "户外"]);
    }

    #[test]
    fn test_pools_are_non_empty() {
        for pool in [
            SURNAMES,
            GIVEN_NAMES,
            WORDS,
            CATEGORIES,
            USERNAME_WORDS,
            EMAIL_DOMAINS,
            PHONE_PREFIXES,
        ] {
            assert!(!pool.is_empty());
        }
    }

    #[test]
    fn test_phone_prefixes_are_three_digit_mobile() {
        for prefix in PHONE_PREFIXES {
            assert_eq!(prefix.len(), 3);
            assert!(prefix.starts_with('1'));
        }
    }
}
