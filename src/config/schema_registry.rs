// ==========================================
// ARK 服务器配置工作台 - 字段目录查询
// ==========================================
// 职责: 按 (游戏版本, 配置文件) 返回分组字段表，提供字段查找与过滤
// 规则: 无字段表的文件返回 None，调用方退回纯文本编辑，不报错
// ==========================================

use crate::config::schema_catalog::{game_ini_groups, game_user_settings_groups};
use crate::domain::schema::{ConfigGroup, FieldSchema};
use crate::domain::types::{ConfigFileKind, GameVariant};
use crate::engine::session::ConfigSession;
use std::sync::OnceLock;

static ASE_GAME_USER_SETTINGS: OnceLock<Vec<ConfigGroup>> = OnceLock::new();
static ASA_GAME_USER_SETTINGS: OnceLock<Vec<ConfigGroup>> = OnceLock::new();
static ASE_GAME: OnceLock<Vec<ConfigGroup>> = OnceLock::new();
static ASA_GAME: OnceLock<Vec<ConfigGroup>> = OnceLock::new();

// ==========================================
// SchemaRegistry - 字段目录
// ==========================================
pub struct SchemaRegistry;

impl SchemaRegistry {
    /// 获取字段表
    ///
    /// # 返回
    /// - Some: 分组字段表（首次访问时构建，之后复用）
    /// - None: 该文件没有字段表
    pub fn get_schema(variant: GameVariant, file: ConfigFileKind) -> Option<&'static [ConfigGroup]> {
        let groups = match (variant, file) {
            (GameVariant::Ase, ConfigFileKind::GameUserSettings) => ASE_GAME_USER_SETTINGS
                .get_or_init(|| game_user_settings_groups(GameVariant::Ase)),
            (GameVariant::Asa, ConfigFileKind::GameUserSettings) => ASA_GAME_USER_SETTINGS
                .get_or_init(|| game_user_settings_groups(GameVariant::Asa)),
            (GameVariant::Ase, ConfigFileKind::Game) => {
                ASE_GAME.get_or_init(|| game_ini_groups(GameVariant::Ase))
            }
            (GameVariant::Asa, ConfigFileKind::Game) => {
                ASA_GAME.get_or_init(|| game_ini_groups(GameVariant::Asa))
            }
            _ => return None,
        };
        Some(groups.as_slice())
    }

    /// 是否有字段表
    pub fn has_schema(variant: GameVariant, file: ConfigFileKind) -> bool {
        Self::get_schema(variant, file).is_some()
    }

    /// 按 (section, key) 查找字段
    pub fn find_field<'a>(
        schema: &'a [ConfigGroup],
        section: &str,
        key: &str,
    ) -> Option<&'a FieldSchema> {
        schema
            .iter()
            .flat_map(|g| g.fields.iter())
            .find(|f| f.matches(section, key))
    }

    /// 按标题查找分组（忽略大小写）
    pub fn find_group<'a>(schema: &'a [ConfigGroup], title: &str) -> Option<&'a ConfigGroup> {
        schema
            .iter()
            .find(|g| g.title.eq_ignore_ascii_case(title.trim()))
    }

    /// 过滤字段表
    ///
    /// # 参数
    /// - query: 匹配 label / description / key（忽略大小写），空串不过滤
    /// - modified_only: 仅保留会话中已修改的字段
    ///
    /// # 返回
    /// 过滤后的分组，空分组被丢弃
    pub fn filter_schema(
        schema: &[ConfigGroup],
        query: &str,
        modified_only: bool,
        session: &ConfigSession,
    ) -> Vec<ConfigGroup> {
        let needle = query.trim().to_lowercase();

        schema
            .iter()
            .filter_map(|group| {
                let fields: Vec<FieldSchema> = group
                    .fields
                    .iter()
                    .filter(|f| needle.is_empty() || field_matches(f, &needle))
                    .filter(|f| !modified_only || session.is_modified(f.section, f.key))
                    .cloned()
                    .collect();

                if fields.is_empty() {
                    None
                } else {
                    Some(ConfigGroup::new(group.title, group.description, fields))
                }
            })
            .collect()
    }

    /// 统计字段表中已修改的字段数（仅用于展示）
    pub fn count_modified(schema: &[ConfigGroup], session: &ConfigSession) -> usize {
        schema
            .iter()
            .flat_map(|g| g.fields.iter())
            .filter(|f| session.is_modified(f.section, f.key))
            .count()
    }

    /// 单个分组中已修改的字段数
    pub fn count_modified_in_group(group: &ConfigGroup, session: &ConfigSession) -> usize {
        group
            .fields
            .iter()
            .filter(|f| session.is_modified(f.section, f.key))
            .count()
    }
}

fn field_matches(field: &FieldSchema, needle: &str) -> bool {
    field.label.to_lowercase().contains(needle)
        || field.key.to_lowercase().contains(needle)
        || field
            .description
            .map(|d| d.to_lowercase().contains(needle))
            .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_available_only_for_structured_files() {
        for variant in [GameVariant::Ase, GameVariant::Asa] {
            assert!(SchemaRegistry::has_schema(variant, ConfigFileKind::GameUserSettings));
            assert!(SchemaRegistry::has_schema(variant, ConfigFileKind::Game));
            assert!(SchemaRegistry::get_schema(variant, ConfigFileKind::Engine).is_none());
            assert!(SchemaRegistry::get_schema(variant, ConfigFileKind::Scaling).is_none());
            assert!(SchemaRegistry::get_schema(variant, ConfigFileKind::Custom).is_none());
        }
    }

    #[test]
    fn test_schema_is_cached() {
        let a = SchemaRegistry::get_schema(GameVariant::Asa, ConfigFileKind::Game).unwrap();
        let b = SchemaRegistry::get_schema(GameVariant::Asa, ConfigFileKind::Game).unwrap();
        assert!(std::ptr::eq(a, b));
    }

    #[test]
    fn test_find_field() {
        let schema =
            SchemaRegistry::get_schema(GameVariant::Ase, ConfigFileKind::GameUserSettings).unwrap();
        let field = SchemaRegistry::find_field(schema, "ServerSettings", "MaxPlayers").unwrap();
        assert_eq!(field.default_value, Some("70"));
        assert!(SchemaRegistry::find_field(schema, "ServerSettings", "NoSuchKey").is_none());
        assert!(SchemaRegistry::find_field(schema, "Other", "MaxPlayers").is_none());
    }

    #[test]
    fn test_filter_by_query_drops_empty_groups() {
        let schema =
            SchemaRegistry::get_schema(GameVariant::Ase, ConfigFileKind::GameUserSettings).unwrap();
        let session = ConfigSession::new("s1", ConfigFileKind::GameUserSettings);

        let filtered = SchemaRegistry::filter_schema(schema, "maxplayers", false, &session);
        assert!(!filtered.is_empty());
        assert!(filtered.len() < schema.len());
        assert!(filtered.iter().all(|g| !g.fields.is_empty()));

        let none = SchemaRegistry::filter_schema(schema, "zzz-no-match-zzz", false, &session);
        assert!(none.is_empty());
    }

    #[test]
    fn test_filter_modified_only_and_count() {
        let schema =
            SchemaRegistry::get_schema(GameVariant::Ase, ConfigFileKind::GameUserSettings).unwrap();
        let mut session = ConfigSession::from_text(
            "s1",
            ConfigFileKind::GameUserSettings,
            "[ServerSettings]\nMaxPlayers=70\n",
        );
        assert_eq!(SchemaRegistry::count_modified(schema, &session), 0);
        assert!(SchemaRegistry::filter_schema(schema, "", true, &session).is_empty());

        session.update_setting("ServerSettings", "MaxPlayers", "20");
        assert_eq!(SchemaRegistry::count_modified(schema, &session), 1);

        let filtered = SchemaRegistry::filter_schema(schema, "", true, &session);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].fields.len(), 1);
        assert_eq!(filtered[0].fields[0].key, "MaxPlayers");
    }

    #[test]
    fn test_find_group_case_insensitive() {
        let schema = SchemaRegistry::get_schema(GameVariant::Ase, ConfigFileKind::Game).unwrap();
        assert!(SchemaRegistry::find_group(schema, "core multipliers").is_some());
        assert!(SchemaRegistry::find_group(schema, "Nope").is_none());
    }
}
