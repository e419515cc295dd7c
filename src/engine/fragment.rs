// ==========================================
// ARK 服务器配置工作台 - 片段拼接
// ==========================================
// 职责: 把生成的片段（经验表、模组设置）追加到原始文本末尾
// 规则: 纯字符串拼接 raw + "\n\n" + fragment，不做结构合并，不去重
// ==========================================

use crate::config::mod_catalog::builtin_mods;
use crate::domain::document::ConfigSection;
use crate::domain::mod_setting::ModDefinition;
use crate::domain::types::EditMode;
use crate::engine::error::{EngineError, EngineResult};
use crate::engine::session::ConfigSession;
use tracing::{debug, info};

/// 片段分隔符
pub const FRAGMENT_SEPARATOR: &str = "\n\n";

const GAME_MODE_HEADER: &str = "[/script/shootergame.shootergamemode]";

// ==========================================
// FragmentComposer - 片段拼接器
// ==========================================
pub struct FragmentComposer;

impl FragmentComposer {
    /// 文本拼接
    pub fn compose(raw_text: &str, fragment: &str) -> String {
        let mut out = String::with_capacity(raw_text.len() + FRAGMENT_SEPARATOR.len() + fragment.len());
        out.push_str(raw_text);
        out.push_str(FRAGMENT_SEPARATOR);
        out.push_str(fragment);
        out
    }

    /// 追加到会话的原始文本缓冲，并切换为 Raw 模式
    ///
    /// Visual 模式下若有未保存的可视化修改，先以工作副本的序列化结果作为底稿
    pub fn append_to_session(session: &mut ConfigSession, fragment: &str) {
        let base = if session.mode() == EditMode::Visual && !session.modified_keys().is_empty() {
            session.serialize_for_save()
        } else {
            session.raw_text().to_string()
        };
        session.set_raw_text(Self::compose(&base, fragment));
        session.set_mode(EditMode::Raw);
        info!(
            session_id = %session.session_id(),
            fragment_bytes = fragment.len(),
            "片段已追加到原始文本"
        );
    }
}

// ==========================================
// ModSettingsDraft - 模组设置草稿
// ==========================================
#[derive(Debug, Clone)]
pub struct ModSettingsDraft {
    mods: Vec<ModDefinition>,
    values: Vec<ConfigSection>, // 每个模组一份，节名即模组ID
    custom: Vec<(String, String)>,
}

impl ModSettingsDraft {
    /// 以模组目录创建，取值初始化为默认值
    pub fn new(mods: Vec<ModDefinition>) -> Self {
        let values = mods.iter().map(default_values).collect();
        Self {
            mods,
            values,
            custom: Vec::new(),
        }
    }

    pub fn with_builtin() -> Self {
        Self::new(builtin_mods().to_vec())
    }

    pub fn mods(&self) -> &[ModDefinition] {
        &self.mods
    }

    pub fn custom_settings(&self) -> &[(String, String)] {
        &self.custom
    }

    pub fn value(&self, mod_id: &str, key: &str) -> Option<&str> {
        self.values
            .iter()
            .find(|v| v.name() == mod_id)
            .and_then(|v| v.get(key))
    }

    /// 修改模组设置
    pub fn update(&mut self, mod_id: &str, key: &str, value: &str) -> EngineResult<()> {
        let values = self
            .values
            .iter_mut()
            .find(|v| v.name() == mod_id)
            .ok_or_else(|| unknown_mod(mod_id))?;
        values.set(key, value);
        Ok(())
    }

    /// 恢复某个模组的默认值
    pub fn reset_mod(&mut self, mod_id: &str) -> EngineResult<()> {
        let idx = self
            .mods
            .iter()
            .position(|m| m.id == mod_id)
            .ok_or_else(|| unknown_mod(mod_id))?;
        self.values[idx] = default_values(&self.mods[idx]);
        debug!(mod_id, "模组设置已恢复默认值");
        Ok(())
    }

    /// 添加自定义设置
    pub fn add_custom(&mut self, key: &str, value: &str) -> EngineResult<()> {
        if key.trim().is_empty() {
            return Err(EngineError::InvalidValue {
                field: "key".to_string(),
                message: "自定义设置的键不能为空".to_string(),
            });
        }
        self.custom.push((key.to_string(), value.to_string()));
        Ok(())
    }

    /// 删除自定义设置
    pub fn remove_custom(&mut self, index: usize) -> EngineResult<(String, String)> {
        let len = self.custom.len();
        if index >= len {
            return Err(EngineError::IndexOutOfRange { index, len });
        }
        Ok(self.custom.remove(index))
    }

    /// 渲染为 Game.ini 片段（行间以 `\n` 连接）
    pub fn render(&self) -> String {
        let mut lines: Vec<String> = vec![
            GAME_MODE_HEADER.to_string(),
            String::new(),
            "; === Mod Settings ===".to_string(),
        ];

        for (definition, values) in self.mods.iter().zip(&self.values) {
            if values.is_empty() {
                continue;
            }
            lines.push(format!("; --- {} ---", definition.name));
            lines.extend(
                values
                    .iter()
                    .filter(|(_, value)| !value.is_empty())
                    .map(|(key, value)| format!("{}={}", key, value)),
            );
            lines.push(String::new());
        }

        if !self.custom.is_empty() {
            lines.push("; --- Custom Settings ---".to_string());
            lines.extend(self.custom.iter().map(|(key, value)| format!("{}={}", key, value)));
        }

        lines.join("\n")
    }
}

impl Default for ModSettingsDraft {
    fn default() -> Self {
        Self::with_builtin()
    }
}

fn default_values(definition: &ModDefinition) -> ConfigSection {
    let mut section = ConfigSection::new(definition.id);
    for setting in &definition.settings {
        section.set(setting.key, setting.default_value);
    }
    section
}

fn unknown_mod(mod_id: &str) -> EngineError {
    EngineError::InvalidValue {
        field: "mod_id".to_string(),
        message: format!("未知模组: {}", mod_id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::mod_setting::ModSetting;
    use crate::domain::types::{ConfigFileKind, FieldType};

    fn draft() -> ModSettingsDraft {
        ModSettingsDraft::new(vec![
            ModDefinition {
                id: "spy",
                name: "Spyglass",
                steam_id: None,
                description: "",
                settings: vec![
                    ModSetting::new("Range", "Range", FieldType::Number, "10000"),
                    ModSetting::new("ShowWild", "Wild", FieldType::Boolean, "True"),
                ],
            },
            ModDefinition {
                id: "custom",
                name: "Custom Mod Settings",
                steam_id: None,
                description: "",
                settings: vec![],
            },
        ])
    }

    #[test]
    fn test_compose() {
        assert_eq!(FragmentComposer::compose("[A]\nX=1\n", "frag"), "[A]\nX=1\n\n\nfrag");
    }

    #[test]
    fn test_render_skips_empty_values_and_empty_mods() {
        let mut d = draft();
        d.update("spy", "ShowWild", "").unwrap();
        d.add_custom("Foo", "Bar").unwrap();
        assert_eq!(
            d.render(),
            "[/script/shootergame.shootergamemode]\n\n; === Mod Settings ===\n\
             ; --- Spyglass ---\nRange=10000\n\n; --- Custom Settings ---\nFoo=Bar"
        );
    }

    #[test]
    fn test_reset_and_errors() {
        let mut d = draft();
        d.update("spy", "Range", "5").unwrap();
        d.reset_mod("spy").unwrap();
        assert_eq!(d.value("spy", "Range"), Some("10000"));
        assert!(d.update("nope", "K", "V").is_err());
        assert!(d.add_custom("  ", "V").is_err());
        assert!(matches!(
            d.remove_custom(0),
            Err(EngineError::IndexOutOfRange { index: 0, len: 0 })
        ));
    }

    #[test]
    fn test_append_to_session_switches_to_raw() {
        let mut session = ConfigSession::from_text("srv", ConfigFileKind::Game, "[S]\nK=V\n");
        FragmentComposer::append_to_session(&mut session, "frag");
        FragmentComposer::append_to_session(&mut session, "frag");
        assert_eq!(session.mode(), EditMode::Raw);
        assert_eq!(session.raw_text(), "[S]\nK=V\n\n\nfrag\n\nfrag");
    }
}
