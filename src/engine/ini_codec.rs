// ==========================================
// ARK 服务器配置工作台 - INI 编解码
// ==========================================
// 职责: 原始文本 ⇄ ConfigDocument
// 红线: 解析宽松，不识别的行直接跳过，永不报错
// ==========================================
// 文本格式:
// - 节头 `[Name]` 独占一行
// - 键值 `Key=Value`，以第一个 `=` 分割，两侧去空白
// - 每个节输出后跟一个空行
// ==========================================

use crate::domain::document::ConfigDocument;
use tracing::instrument;

// ==========================================
// IniCodec - INI 编解码器
// ==========================================
pub struct IniCodec;

impl IniCodec {
    /// 解析原始文本
    ///
    /// # 规则
    /// - 每行先去除首尾空白
    /// - `[Name]` 打开节 Name（不存在则创建），成为当前节
    /// - 含 `=` 且存在当前节的行按第一个 `=` 拆分为键值（同键后写覆盖）
    /// - 首个节头之前的行、不含 `=` 的行一律忽略
    /// - 注释不做特殊处理（含 `=` 的注释行会被当作键值）
    #[instrument(skip(text), fields(bytes = text.len()))]
    pub fn parse(text: &str) -> ConfigDocument {
        let mut doc = ConfigDocument::new();
        let mut current: Option<String> = None;

        for raw_line in text.lines() {
            let line = raw_line.trim();

            if let Some(name) = section_header(line) {
                if name.is_empty() {
                    // `[]` 不构成有效节，后续键值在下一个节头前被丢弃
                    current = None;
                } else {
                    doc.ensure_section(name);
                    current = Some(name.to_string());
                }
                continue;
            }

            let Some(section) = current.as_deref() else {
                continue;
            };

            if let Some((key, value)) = line.split_once('=') {
                doc.set(section, key.trim(), value.trim());
            }
        }

        doc
    }

    /// 序列化为文本
    ///
    /// 按文档顺序输出 `[Section]`、逐行 `Key=Value`，每节以空行结束
    pub fn serialize(doc: &ConfigDocument) -> String {
        let mut out = String::new();
        for section in doc.sections() {
            out.push('[');
            out.push_str(section.name());
            out.push_str("]\n");
            for (key, value) in section.iter() {
                out.push_str(key);
                out.push('=');
                out.push_str(value);
                out.push('\n');
            }
            out.push('\n');
        }
        out
    }
}

impl IniCodec {
    /// 在原始文本中直接写入单个键值，其余行（注释、重复键、片段）原样保留
    ///
    /// # 规则
    /// - 节内已有该键: 改写最后一次出现的那一行（与解析时后写覆盖一致）
    /// - 节存在但无该键: 插入到第一个节头之后
    /// - 节不存在: 在文本末尾追加 `[Section]` 与键值
    pub fn set_value_in_text(text: &str, section: &str, key: &str, value: &str) -> String {
        let entry = format!("{}={}", key, value);
        let mut lines: Vec<String> = text.split('\n').map(str::to_string).collect();

        let mut current: Option<&str> = None;
        let mut header_idx: Option<usize> = None;
        let mut last_match: Option<usize> = None;
        for (idx, raw_line) in lines.iter().enumerate() {
            let line = raw_line.trim();
            if let Some(name) = section_header(line) {
                current = if name.is_empty() { None } else { Some(name) };
                if name == section && header_idx.is_none() {
                    header_idx = Some(idx);
                }
                continue;
            }
            if current != Some(section) {
                continue;
            }
            if let Some((k, _)) = line.split_once('=') {
                if k.trim() == key {
                    last_match = Some(idx);
                }
            }
        }

        match (last_match, header_idx) {
            (Some(idx), _) => {
                let crlf = lines[idx].ends_with('\r');
                lines[idx] = if crlf { format!("{}\r", entry) } else { entry };
                lines.join("\n")
            }
            (None, Some(idx)) => {
                let crlf = lines[idx].ends_with('\r');
                lines.insert(idx + 1, if crlf { format!("{}\r", entry) } else { entry });
                lines.join("\n")
            }
            (None, None) => {
                let mut out = text.to_string();
                if !out.is_empty() && !out.ends_with('\n') {
                    out.push('\n');
                }
                out.push('[');
                out.push_str(section);
                out.push_str("]\n");
                out.push_str(&entry);
                out.push('\n');
                out
            }
        }
    }
}

/// 识别节头，返回方括号内的名称
fn section_header(line: &str) -> Option<&str> {
    if line.len() >= 2 && line.starts_with('[') && line.ends_with(']') {
        Some(&line[1..line.len() - 1])
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic() {
        let doc = IniCodec::parse("[A]\nX=1\n\n[B]\nY=2\n");
        assert_eq!(doc.get("A", "X"), Some("1"));
        assert_eq!(doc.get("B", "Y"), Some("2"));
        assert_eq!(doc.len(), 2);
    }

    #[test]
    fn test_value_keeps_inner_equals() {
        let doc = IniCodec::parse("[S]\nRamp = (ExperiencePointsForLevel=5,Alpha=1.0) \n");
        assert_eq!(
            doc.get("S", "Ramp"),
            Some("(ExperiencePointsForLevel=5,Alpha=1.0)")
        );
    }

    #[test]
    fn test_lines_before_header_and_without_equals_are_ignored() {
        let doc = IniCodec::parse("Orphan=1\n[S]\njust text\nK=V\n");
        assert_eq!(doc.entry_count(), 1);
        assert_eq!(doc.get("S", "K"), Some("V"));
    }

    #[test]
    fn test_duplicate_key_last_write_wins() {
        let doc = IniCodec::parse("[S]\nK=1\nK=2\n");
        assert_eq!(doc.get("S", "K"), Some("2"));
        assert_eq!(doc.entry_count(), 1);
    }

    #[test]
    fn test_repeated_header_reopens_section() {
        let doc = IniCodec::parse("[S]\nA=1\n[T]\nB=2\n[S]\nC=3\n");
        let names: Vec<&str> = doc.section_names().collect();
        assert_eq!(names, vec!["S", "T"]);
        assert_eq!(doc.get("S", "A"), Some("1"));
        assert_eq!(doc.get("S", "C"), Some("3"));
    }

    #[test]
    fn test_comment_with_equals_is_misparsed() {
        let doc = IniCodec::parse("[S]\n; Note=hello\n");
        assert_eq!(doc.get("S", "; Note"), Some("hello"));
    }

    #[test]
    fn test_serialize_layout() {
        let doc = IniCodec::parse("[A]\nX=1\n\n[B]\nY=2\n");
        assert_eq!(IniCodec::serialize(&doc), "[A]\nX=1\n\n[B]\nY=2\n\n");
    }

    #[test]
    fn test_serialize_empty_section() {
        let doc = IniCodec::parse("[Empty]\n");
        assert_eq!(IniCodec::serialize(&doc), "[Empty]\n\n");
    }

    #[test]
    fn test_set_value_in_text_rewrites_last_occurrence() {
        let text = "; header\n[S]\nK=1\n; keep\n[T]\nX=0\n[S]\nK=2\n";
        let out = IniCodec::set_value_in_text(text, "S", "K", "9");
        assert_eq!(out, "; header\n[S]\nK=1\n; keep\n[T]\nX=0\n[S]\nK=9\n");
        assert_eq!(IniCodec::parse(&out).get("S", "K"), Some("9"));
    }

    #[test]
    fn test_set_value_in_text_inserts_and_appends() {
        let out = IniCodec::set_value_in_text("[S]\nA=1\n\n[frag]\nR=(x)\nR=(y)", "S", "B", "2");
        assert_eq!(out, "[S]\nB=2\nA=1\n\n[frag]\nR=(x)\nR=(y)");

        let out = IniCodec::set_value_in_text("[S]\nA=1", "New", "K", "V");
        assert_eq!(out, "[S]\nA=1\n[New]\nK=V\n");
        assert_eq!(IniCodec::set_value_in_text("", "New", "K", "V"), "[New]\nK=V\n");
    }

    #[test]
    fn test_set_value_in_text_keeps_crlf() {
        let out = IniCodec::set_value_in_text("[S]\r\nK=1\r\n", "S", "K", "2");
        assert_eq!(out, "[S]\r\nK=2\r\n");
    }

    #[test]
    fn test_crlf_input() {
        let doc = IniCodec::parse("[S]\r\nK=V\r\n");
        assert_eq!(doc.get("S", "K"), Some("V"));
    }
}
