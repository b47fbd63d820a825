/// Languages the deployed model translates between, as `(value, label)`.
/// The value is what gets embedded in prompts; the label adds the code.
pub const SUPPORTED_LANGUAGES: &[(&str, &str)] = &[
    ("中文", "中文 (zh)"),
    ("英文", "英语 (en)"),
    ("法语", "法语 (fr)"),
    ("葡萄牙语", "葡萄牙语 (pt)"),
    ("西班牙语", "西班牙语 (es)"),
    ("日语", "日语 (ja)"),
    ("土耳其语", "土耳其语 (tr)"),
    ("俄语", "俄语 (ru)"),
    ("阿拉伯语", "阿拉伯语 (ar)"),
    ("韩语", "韩语 (ko)"),
    ("泰语", "泰语 (th)"),
    ("意大利语", "意大利语 (it)"),
    ("德语", "德语 (de)"),
    ("越南语", "越南语 (vi)"),
    ("马来语", "马来语 (ms)"),
    ("印尼语", "印尼语 (id)"),
    ("菲律宾语", "菲律宾语 (tl)"),
    ("印地语", "印地语 (hi)"),
    ("繁体中文", "繁体中文 (zh-Hant)"),
    ("波兰语", "波兰语 (pl)"),
    ("捷克语", "捷克语 (cs)"),
    ("荷兰语", "荷兰语 (nl)"),
    ("高棉语", "高棉语 (km)"),
    ("缅甸语", "缅甸语 (my)"),
    ("波斯语", "波斯语 (fa)"),
    ("古吉拉特语", "古吉拉特语 (gu)"),
    ("乌尔都语", "乌尔都语 (ur)"),
    ("泰卢固语", "泰卢固语 (te)"),
    ("马拉地语", "马拉地语 (mr)"),
    ("希伯来语", "希伯来语 (he)"),
    ("孟加拉语", "孟加拉语 (bn)"),
    ("泰米尔语", "泰米尔语 (ta)"),
    ("乌克兰语", "乌克兰语 (uk)"),
    ("藏语", "藏语 (bo)"),
    ("哈萨克语", "哈萨克语 (kk)"),
    ("蒙古语", "蒙古语 (mn)"),
    ("维吾尔语", "维吾尔语 (ug)"),
    ("粤语", "粤语 (yue)"),
];

pub const DEFAULT_SOURCE_LANGUAGE: &str = "中文";
pub const DEFAULT_TARGET_LANGUAGE: &str = "英文";

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn values_are_unique_and_defaults_are_listed() {
        let values: HashSet<_> = SUPPORTED_LANGUAGES.iter().map(|(v, _)| *v).collect();

        assert_eq!(values.len(), SUPPORTED_LANGUAGES.len());
        assert!(values.contains(DEFAULT_SOURCE_LANGUAGE));
        assert!(values.contains(DEFAULT_TARGET_LANGUAGE));
    }
}
