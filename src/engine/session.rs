// ==========================================
// ARK 服务器配置工作台 - 配置编辑会话
// ==========================================
// 职责: 持有原始快照与工作副本，计算修改状态，产出待保存文本
// 红线: 编辑操作只改 working（Raw 模式下同步写入原始文本缓冲）；original 只由 load / commit / reload 替换
// ==========================================
// 生命周期:
// - 选中 (服务器, 文件) 时创建并 load
// - 编辑期间通过本结构体的方法修改
// - 切换文件/服务器时丢弃
// ==========================================

use crate::domain::document::ConfigDocument;
use crate::domain::preset::Preset;
use crate::domain::schema::ConfigGroup;
use crate::domain::types::{ConfigFileKind, EditMode};
use crate::engine::ini_codec::IniCodec;
use chrono::{DateTime, Utc};
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

// ==========================================
// ConfigSession - 单文件编辑会话
// ==========================================
#[derive(Debug, Clone)]
pub struct ConfigSession {
    session_id: String,
    server_id: String,
    file: ConfigFileKind,

    // ===== 文档状态 =====
    original: ConfigDocument,
    working: ConfigDocument,
    raw_text: String, // 原始文本缓冲（Raw 模式下的保存来源）
    mode: EditMode,

    // ===== 外部变更基线 =====
    last_known_mtime: u64,
    loaded_at: DateTime<Utc>,
}

impl ConfigSession {
    /// 创建空会话
    pub fn new(server_id: impl Into<String>, file: ConfigFileKind) -> Self {
        Self {
            session_id: Uuid::new_v4().to_string(),
            server_id: server_id.into(),
            file,
            original: ConfigDocument::new(),
            working: ConfigDocument::new(),
            raw_text: String::new(),
            mode: EditMode::Visual,
            last_known_mtime: 0,
            loaded_at: Utc::now(),
        }
    }

    /// 从原始文本创建会话
    pub fn from_text(server_id: impl Into<String>, file: ConfigFileKind, raw_text: &str) -> Self {
        let mut session = Self::new(server_id, file);
        session.load(raw_text);
        session
    }

    // ==========================================
    // 访问器
    // ==========================================

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    pub fn server_id(&self) -> &str {
        &self.server_id
    }

    pub fn file(&self) -> ConfigFileKind {
        self.file
    }

    pub fn original(&self) -> &ConfigDocument {
        &self.original
    }

    pub fn working(&self) -> &ConfigDocument {
        &self.working
    }

    pub fn raw_text(&self) -> &str {
        &self.raw_text
    }

    pub fn mode(&self) -> EditMode {
        self.mode
    }

    pub fn last_known_mtime(&self) -> u64 {
        self.last_known_mtime
    }

    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }

    // ==========================================
    // 加载
    // ==========================================

    /// 加载原始文本: working 与 original 为两份独立的解析结果
    #[instrument(skip(self, raw_text), fields(session_id = %self.session_id, file = %self.file))]
    pub fn load(&mut self, raw_text: &str) {
        let parsed = IniCodec::parse(raw_text);
        self.working = parsed.clone();
        self.original = parsed;
        self.raw_text = raw_text.to_string();
        self.loaded_at = Utc::now();
        debug!(sections = self.working.len(), "配置已加载");
    }

    /// 外部变更后的静默重载
    ///
    /// 未提交的本地修改会被丢弃（以磁盘为准）
    ///
    /// # 返回
    /// 被丢弃的本地修改键数量
    pub fn reload(&mut self, raw_text: &str, mtime: u64) -> usize {
        let discarded = self.modified_keys().len();
        if discarded > 0 {
            warn!(
                session_id = %self.session_id,
                file = %self.file,
                discarded,
                "外部变更覆盖了未保存的本地修改"
            );
        }
        self.load(raw_text);
        self.last_known_mtime = mtime;
        discarded
    }

    /// 记录外部变更基线
    pub fn set_last_known_mtime(&mut self, mtime: u64) {
        self.last_known_mtime = mtime;
    }

    // ==========================================
    // 读取
    // ==========================================

    /// 工作副本中的原值
    pub fn value(&self, section: &str, key: &str) -> Option<&str> {
        self.working.get(section, key)
    }

    /// 读取设置，缺失或为空时返回 default
    pub fn get_setting<'a>(&'a self, section: &str, key: &str, default: &'a str) -> &'a str {
        match self.working.get(section, key) {
            Some(value) if !value.is_empty() => value,
            _ => default,
        }
    }

    /// 字段是否被修改（缺失视为空字符串）
    pub fn is_modified(&self, section: &str, key: &str) -> bool {
        let working = self.working.get(section, key).unwrap_or("");
        let original = self.original.get(section, key).unwrap_or("");
        working != original
    }

    /// 全文档范围内被修改的 (节, 键)，按 working 顺序，其后是仅存在于 original 的键
    pub fn modified_keys(&self) -> Vec<(String, String)> {
        let mut keys: Vec<(String, String)> = self
            .working
            .entries()
            .filter(|(section, key, _)| self.is_modified(section, key))
            .map(|(section, key, _)| (section.to_string(), key.to_string()))
            .collect();

        for (section, key, _) in self.original.entries() {
            if self.working.get(section, key).is_none() && self.is_modified(section, key) {
                keys.push((section.to_string(), key.to_string()));
            }
        }
        keys
    }

    pub fn has_unsaved_changes(&self) -> bool {
        match self.mode {
            EditMode::Visual => !self.modified_keys().is_empty(),
            EditMode::Raw => IniCodec::parse(&self.raw_text) != self.original,
        }
    }

    // ==========================================
    // 编辑
    // ==========================================

    /// 写入 working[section][key]，节不存在时创建
    pub fn update_setting(&mut self, section: &str, key: &str, value: &str) {
        self.write(section, key, value);
    }

    /// 结构化编辑的唯一写入口
    ///
    /// Raw 模式下保存来源是原始文本缓冲，因此同一键值也写入缓冲
    fn write(&mut self, section: &str, key: &str, value: &str) {
        self.working.set(section, key, value);
        if self.mode == EditMode::Raw {
            self.raw_text = IniCodec::set_value_in_text(&self.raw_text, section, key, value);
        }
    }

    /// 应用预设: 覆写预设中列出的键，其余键不动（幂等）
    ///
    /// # 返回
    /// 写入的键数量
    #[instrument(skip(self, preset), fields(session_id = %self.session_id, preset = %preset.name))]
    pub fn apply_preset(&mut self, preset: &Preset) -> usize {
        let mut written = 0;
        for (section, key, value) in preset.settings.entries() {
            self.write(section, key, value);
            written += 1;
        }
        info!(written, "已应用预设");
        written
    }

    /// 分组恢复默认值（仅处理声明了 default_value 的字段）
    ///
    /// # 返回
    /// 被重置的字段数量
    pub fn reset_group(&mut self, group: &ConfigGroup) -> usize {
        let mut reset = 0;
        for field in group.fields_with_default() {
            if let Some(default) = field.default_value {
                self.write(field.section, field.key, default);
                reset += 1;
            }
        }
        debug!(group = group.title, reset, "分组已恢复默认值");
        reset
    }

    // ==========================================
    // 原始文本模式
    // ==========================================

    pub fn set_mode(&mut self, mode: EditMode) {
        self.mode = mode;
    }

    /// 切换编辑模式并同步两侧内容
    ///
    /// - Visual → Raw: 有未保存的可视化修改时，原始文本缓冲改为工作副本的序列化结果
    /// - Raw → Visual: 工作副本改为原始文本缓冲的解析结果（original 不动）
    pub fn switch_mode(&mut self, mode: EditMode) {
        if mode == self.mode {
            return;
        }
        match mode {
            EditMode::Raw => {
                if !self.modified_keys().is_empty() {
                    self.raw_text = self.serialize_for_save();
                }
            }
            EditMode::Visual => {
                self.working = IniCodec::parse(&self.raw_text);
            }
        }
        self.mode = mode;
        debug!(mode = %mode, "编辑模式已切换");
    }

    /// 替换原始文本缓冲
    pub fn set_raw_text(&mut self, text: impl Into<String>) {
        self.raw_text = text.into();
    }

    /// 在原始文本缓冲末尾追加内容
    pub fn append_raw(&mut self, fragment_text: &str) {
        self.raw_text.push_str(fragment_text);
    }

    // ==========================================
    // 保存
    // ==========================================

    /// 工作副本序列化结果
    pub fn serialize_for_save(&self) -> String {
        IniCodec::serialize(&self.working)
    }

    /// 按编辑模式得到待保存文本
    pub fn text_for_save(&self) -> String {
        match self.mode {
            EditMode::Visual => self.serialize_for_save(),
            EditMode::Raw => self.raw_text.clone(),
        }
    }

    /// 保存成功后提交
    ///
    /// original 重置为 working 的深拷贝，同时把外部变更基线更新为本次写入产生的 mtime。
    /// Raw 模式下先用保存的文本重建 working。
    ///
    /// # 参数
    /// - `mtime`: 写入完成后读取的修改时间
    #[instrument(skip(self), fields(session_id = %self.session_id, file = %self.file))]
    pub fn commit(&mut self, mtime: u64) {
        match self.mode {
            EditMode::Visual => {
                self.raw_text = IniCodec::serialize(&self.working);
            }
            EditMode::Raw => {
                self.working = IniCodec::parse(&self.raw_text);
            }
        }
        self.original = self.working.clone();
        self.last_known_mtime = mtime;
        info!(mtime, "配置已提交");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::schema::FieldSchema;
    use crate::domain::types::FieldType;

    fn session() -> ConfigSession {
        ConfigSession::from_text(
            "srv",
            ConfigFileKind::GameUserSettings,
            "[ServerSettings]\nXPMultiplier=1.0\nServerPVE=False\n",
        )
    }

    #[test]
    fn test_load_is_unmodified() {
        let s = session();
        assert!(!s.is_modified("ServerSettings", "XPMultiplier"));
        assert!(s.modified_keys().is_empty());
        assert_eq!(s.original(), s.working());
    }

    #[test]
    fn test_update_does_not_touch_original() {
        let mut s = session();
        s.update_setting("ServerSettings", "XPMultiplier", "2.0");
        assert_eq!(s.original().get("ServerSettings", "XPMultiplier"), Some("1.0"));
        assert!(s.is_modified("ServerSettings", "XPMultiplier"));

        s.update_setting("ServerSettings", "XPMultiplier", "1.0");
        assert!(!s.is_modified("ServerSettings", "XPMultiplier"));
    }

    #[test]
    fn test_empty_value_equals_missing() {
        let mut s = session();
        s.update_setting("New", "Key", "");
        assert!(!s.is_modified("New", "Key"));
        assert_eq!(s.get_setting("New", "Key", "fallback"), "fallback");
    }

    #[test]
    fn test_reset_group_only_fields_with_default() {
        let mut s = session();
        let group = ConfigGroup::new(
            "Rates",
            "",
            vec![
                FieldSchema::new("XPMultiplier", "XP", FieldType::Number, "ServerSettings")
                    .with_default("1.0"),
                FieldSchema::new("SessionName", "Name", FieldType::Text, "SessionSettings"),
            ],
        );
        s.update_setting("ServerSettings", "XPMultiplier", "5.0");
        assert_eq!(s.reset_group(&group), 1);
        assert_eq!(s.value("ServerSettings", "XPMultiplier"), Some("1.0"));
        assert!(s.working().section("SessionSettings").is_none());
    }

    #[test]
    fn test_commit_in_raw_mode_reparses_buffer() {
        let mut s = session();
        s.set_mode(EditMode::Raw);
        s.set_raw_text("[ServerSettings]\nXPMultiplier=9.0\n");
        assert!(s.has_unsaved_changes());
        s.commit(42);
        assert_eq!(s.value("ServerSettings", "XPMultiplier"), Some("9.0"));
        assert!(s.modified_keys().is_empty());
        assert_eq!(s.last_known_mtime(), 42);
    }

    #[test]
    fn test_reload_discards_local_edits() {
        let mut s = session();
        s.update_setting("ServerSettings", "XPMultiplier", "3.0");
        let discarded = s.reload("[ServerSettings]\nXPMultiplier=4.0\n", 7);
        assert_eq!(discarded, 1);
        assert_eq!(s.value("ServerSettings", "XPMultiplier"), Some("4.0"));
        assert!(!s.is_modified("ServerSettings", "XPMultiplier"));
    }

    #[test]
    fn test_switch_mode_carries_content() {
        let mut s = session();
        s.update_setting("ServerSettings", "XPMultiplier", "2.0");
        s.switch_mode(EditMode::Raw);
        assert_eq!(s.raw_text(), "[ServerSettings]\nXPMultiplier=2.0\nServerPVE=False\n\n");

        s.set_raw_text("[ServerSettings]\nXPMultiplier=6.0\n");
        s.switch_mode(EditMode::Visual);
        assert_eq!(s.mode(), EditMode::Visual);
        assert_eq!(s.value("ServerSettings", "XPMultiplier"), Some("6.0"));
        assert_eq!(s.original().get("ServerSettings", "XPMultiplier"), Some("1.0"));
    }

    #[test]
    fn test_structured_edits_in_raw_mode_reach_saved_text() {
        let mut s = session();
        s.set_mode(EditMode::Raw);
        s.set_raw_text("[ServerSettings]\nXPMultiplier=1.0\nServerPVE=False\n\n; note\n[Extra]\nR=(a)\nR=(b)");

        s.update_setting("ServerSettings", "XPMultiplier", "4.0");
        let preset = Preset::new("p", "").with_setting("ServerSettings", "ServerPVE", "True");
        s.apply_preset(&preset);

        let text = s.text_for_save();
        assert_eq!(
            text,
            "[ServerSettings]\nXPMultiplier=4.0\nServerPVE=True\n\n; note\n[Extra]\nR=(a)\nR=(b)"
        );
        s.commit(1);
        assert_eq!(s.value("ServerSettings", "XPMultiplier"), Some("4.0"));
        assert_eq!(s.value("ServerSettings", "ServerPVE"), Some("True"));
        assert!(s.modified_keys().is_empty());
    }

    #[test]
    fn test_modified_keys_includes_removed_side() {
        let mut s = ConfigSession::new("srv", ConfigFileKind::Game);
        s.load("[A]\nX=1\n");
        s.working = ConfigDocument::new();
        assert_eq!(s.modified_keys(), vec![("A".to_string(), "X".to_string())]);
    }
}
