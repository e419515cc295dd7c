// ==========================================
// INI 编解码集成测试
// ==========================================
// 测试范围:
// 1. parse → serialize → parse 往返一致
// 2. 固定样例的解析与序列化结果
// 3. 宽松解析（注释、空行、无节头内容）
// ==========================================

mod test_helpers;

use ark_config_studio::engine::IniCodec;
use test_helpers::{GAME_FIXTURE, GUS_FIXTURE};

#[test]
fn test_roundtrip_is_stable_for_fixtures() {
    for text in [GUS_FIXTURE, GAME_FIXTURE] {
        let parsed = IniCodec::parse(text);
        let reparsed = IniCodec::parse(&IniCodec::serialize(&parsed));
        assert_eq!(parsed, reparsed);
    }
}

#[test]
fn test_roundtrip_many_sections() {
    let mut text = String::new();
    for s in 0..20 {
        text.push_str(&format!("[Section{}]\n", s));
        for k in 0..15 {
            text.push_str(&format!("Key{}={}\n", k, s * 100 + k));
        }
    }
    let parsed = IniCodec::parse(&text);
    assert_eq!(parsed.len(), 20);
    assert_eq!(parsed.entry_count(), 300);

    let serialized = IniCodec::serialize(&parsed);
    assert_eq!(IniCodec::parse(&serialized), parsed);
    // 序列化结果再序列化不变
    assert_eq!(IniCodec::serialize(&IniCodec::parse(&serialized)), serialized);
}

#[test]
fn test_example_parse_and_serialize() {
    let doc = IniCodec::parse("[A]\nX=1\n\n[B]\nY=2\n");
    assert_eq!(doc.get("A", "X"), Some("1"));
    assert_eq!(doc.get("B", "Y"), Some("2"));
    assert_eq!(doc.entry_count(), 2);
    assert_eq!(IniCodec::serialize(&doc), "[A]\nX=1\n\n[B]\nY=2\n\n");
}

#[test]
fn test_lenient_parse_of_vendor_file() {
    let text = "\
; generated by host panel
orphan=1

[ServerSettings]
  XPMultiplier = 2.5  
just some words
ServerPassword=a=b=c
; Note=comment with equals
";
    let doc = IniCodec::parse(text);
    let section = doc.section("ServerSettings").unwrap();
    assert_eq!(section.get("XPMultiplier"), Some("2.5"));
    assert_eq!(section.get("ServerPassword"), Some("a=b=c"));
    // 含 `=` 的注释行按键值处理
    assert_eq!(section.get("; Note"), Some("comment with equals"));
    assert!(doc.get("ServerSettings", "orphan").is_none());
    assert_eq!(doc.len(), 1);
}
