// ==========================================
// ARK 服务器配置工作台 - 字段目录
// ==========================================
// 职责: 编译期内置的 (游戏版本, 配置文件) → 分组字段表
// 范围: GameUserSettings.ini 与 Game.ini，ASE/ASA 各一套
// 说明: 其他文件没有字段表，调用方退回纯文本编辑
// ==========================================

use crate::domain::schema::{ConfigGroup, FieldSchema};
use crate::domain::types::{FieldType, GameVariant};

pub const SERVER_SETTINGS: &str = "ServerSettings";
pub const MESSAGE_OF_THE_DAY: &str = "MessageOfTheDay";
pub const GAME_MODE: &str = "/Script/ShooterGame.ShooterGameMode";

// ==========================================
// 字段构造
// ==========================================

fn text(section: &'static str, key: &'static str, label: &'static str) -> FieldSchema {
    FieldSchema::new(key, label, FieldType::Text, section)
}

fn number(
    section: &'static str,
    key: &'static str,
    label: &'static str,
    default: &'static str,
) -> FieldSchema {
    FieldSchema::new(key, label, FieldType::Number, section).with_default(default)
}

fn boolean(
    section: &'static str,
    key: &'static str,
    label: &'static str,
    default: &'static str,
) -> FieldSchema {
    FieldSchema::new(key, label, FieldType::Boolean, section).with_default(default)
}

fn join(parts: Vec<Vec<FieldSchema>>) -> Vec<FieldSchema> {
    parts.into_iter().flatten().collect()
}

// ==========================================
// GameUserSettings.ini
// ==========================================

/// GameUserSettings.ini 分组
pub fn game_user_settings_groups(variant: GameVariant) -> Vec<ConfigGroup> {
    let is_asa = variant == GameVariant::Asa;

    let identity = if is_asa {
        ConfigGroup::new(
            "Server Identity & Access",
            "Server name, passwords, and RCON",
            join(vec![
                server_settings(),
                vec![
                    boolean(SERVER_SETTINGS, "RCONEnabled", "Enable RCON", "True")
                        .with_description("Enable remote console access"),
                    number(SERVER_SETTINGS, "RCONPort", "RCON Port", "27020")
                        .with_range(1024.0, 65535.0)
                        .with_description("Port for RCON connections"),
                ],
            ]),
        )
    } else {
        ConfigGroup::new(
            "Server Identity & Access",
            "Server name, passwords, and access control",
            server_settings(),
        )
    };

    let collision = boolean(
        SERVER_SETTINGS,
        "DisableStructurePlacementCollision",
        "Disable Structure Collision",
        "False",
    )
    .with_description("Allow structures to be placed with overlaps");

    let gameplay_rules = if is_asa {
        ConfigGroup::new(
            "Gameplay Rules",
            "Core gameplay settings for ASA",
            join(vec![
                gameplay(),
                vec![
                    collision,
                    boolean(SERVER_SETTINGS, "AllowAnyoneBabyImprintCuddle", "Anyone Can Cuddle", "False")
                        .with_description("Allow any tribe member to imprint"),
                    boolean(SERVER_SETTINGS, "DisableImprintDinoBuff", "Disable Imprint Buff", "False")
                        .with_description("Disable stat bonuses from imprinting"),
                ],
            ]),
        )
    } else {
        ConfigGroup::new(
            "Gameplay Rules",
            "Core gameplay settings and restrictions",
            join(vec![
                gameplay(),
                vec![
                    boolean(SERVER_SETTINGS, "AllowCaveBuildingPvE", "Allow Cave Building (PvE)", "False")
                        .with_description("Allow building in caves in PvE mode"),
                    boolean(SERVER_SETTINGS, "AllowFlyerCarryPvE", "Allow Flyer Carry (PvE)", "False")
                        .with_description("Allow flyers to carry players/dinos in PvE"),
                    collision,
                ],
            ]),
        )
    };

    let mut breeding_fields = join(vec![taming(), breeding()]);
    let mut structure_fields = structure();
    let mut prevention_fields = prevention();
    if is_asa {
        breeding_fields.push(
            number(SERVER_SETTINGS, "BabyImprintAmountMultiplier", "Baby Imprint Amount", "1.0")
                .with_range(0.1, 10.0)
                .with_step(0.1)
                .with_description("Amount of imprint gained per cuddle"),
        );
        structure_fields.push(
            boolean(SERVER_SETTINGS, "DisableStructureDecayPvE", "Disable Structure Decay (PvE)", "False")
                .with_description("Completely disable structure decay in PvE"),
        );
        structure_fields.push(
            boolean(SERVER_SETTINGS, "ForceAllStructureLocking", "Force Structure Locking", "False")
                .with_description("Automatically lock all structures"),
        );
        prevention_fields.push(
            boolean(SERVER_SETTINGS, "EnableCryopodNerf", "Enable Cryopod Nerf", "True")
                .with_description("Apply cryopod sickness debuff"),
        );
    }

    vec![
        identity,
        gameplay_rules,
        ConfigGroup::new("Difficulty & Limits", "Server difficulty and various limits", difficulty()),
        ConfigGroup::new(
            "PvP & Raid Settings",
            "PvP combat rules and offline raid protection",
            pvp_settings(),
        ),
        ConfigGroup::new(
            "Admin & Server Management",
            "Admin tools, logging, and auto-save",
            admin_settings(),
        ),
        ConfigGroup::new(
            "Player Stats & Progression",
            "Player character stats and leveling",
            join(vec![player_stats(), xp_leveling()]),
        ),
        ConfigGroup::new("Dino Settings", "Dinosaur stats and spawning", dino_stats()),
        ConfigGroup::new("Wild Dino Behavior", "Wild dino stats and behaviors", wild_dino()),
        ConfigGroup::new(
            "Flyers & Movement",
            "Flying creature settings and movement",
            flyer_settings(),
        ),
        ConfigGroup::new(
            "Harvesting & Resources",
            "Resource gathering and respawn rates",
            harvesting(),
        ),
        ConfigGroup::new("Taming & Breeding", "Taming speed and breeding settings", breeding_fields),
        ConfigGroup::new("Environment & Time", "Day/night cycles and weather", environment()),
        ConfigGroup::new(
            "Structure Settings",
            "Structure decay, damage, and platform limits",
            structure_fields,
        ),
        ConfigGroup::new("Supply Drops & Loot", "Loot quality and crafting bonuses", loot_settings()),
        ConfigGroup::new(
            "Spoiling & Decay Timers",
            "Item spoiling, corpse decay, and crops",
            timers(),
        ),
        ConfigGroup::new("Engrams & Crafting", "Engram unlocks and mindwipe options", engrams()),
        ConfigGroup::new("Upload/Download Rules", "Prevent uploads and downloads", prevention_fields),
    ]
}

// ==========================================
// Game.ini
// ==========================================

/// Game.ini 分组
pub fn game_ini_groups(variant: GameVariant) -> Vec<ConfigGroup> {
    let mut breeding_fields = game_breeding();
    if variant == GameVariant::Asa {
        breeding_fields.push(
            number(GAME_MODE, "BabyImprintAmountMultiplier", "Baby Imprint Amount", "1.0")
                .with_range(0.1, 10.0)
                .with_step(0.1)
                .with_description("Imprint percentage per cuddle"),
        );
    }

    vec![
        ConfigGroup::new("Core Multipliers", "Essential game rate multipliers", game_multipliers()),
        ConfigGroup::new("Breeding Settings", "Breeding and maturation rates", breeding_fields),
        ConfigGroup::new(
            "Player Stats Per Level",
            "Stats gained per level for players",
            game_player_stats(),
        ),
        ConfigGroup::new(
            "Tamed Dino Stats Per Level",
            "Stats gained per level for tamed dinos",
            game_dino_tamed_stats(),
        ),
        ConfigGroup::new(
            "Wild Dino Stats Per Level",
            "Stats per level for wild dinos",
            game_dino_wild_stats(),
        ),
        ConfigGroup::new(
            "Advanced Options",
            "Friendly fire, recipes, and misc settings",
            game_advanced_options(),
        ),
    ]
}

// ==========================================
// 共享字段表
// ==========================================

fn server_settings() -> Vec<FieldSchema> {
    vec![
        text(SERVER_SETTINGS, "SessionName", "Session Name")
            .with_default("Ark Server")
            .with_description("The name that appears in the server browser"),
        text(MESSAGE_OF_THE_DAY, "Message", "Message of the Day")
            .with_description("Message shown when players join"),
        number(MESSAGE_OF_THE_DAY, "Duration", "MOTD Duration", "20")
            .with_description("How long the MOTD is displayed (seconds)"),
        text(SERVER_SETTINGS, "ServerPassword", "Server Password")
            .with_description("Leave empty for no password"),
        text(SERVER_SETTINGS, "ServerAdminPassword", "Admin Password")
            .with_description("Password required for admin commands"),
        text(SERVER_SETTINGS, "SpectatorPassword", "Spectator Password")
            .with_description("Password for spectator mode"),
        number(SERVER_SETTINGS, "MaxPlayers", "Max Players", "70")
            .with_range(1.0, 255.0)
            .with_description("Maximum number of players allowed"),
    ]
}

fn gameplay() -> Vec<FieldSchema> {
    vec![
        boolean(SERVER_SETTINGS, "ServerPVE", "PvE Mode", "False")
            .with_description("Enable Player vs Environment mode (no player damage)"),
        boolean(SERVER_SETTINGS, "ServerHardcore", "Hardcore Mode", "False")
            .with_description("Characters are deleted on death"),
        boolean(SERVER_SETTINGS, "GlobalVoiceChat", "Global Voice Chat", "False")
            .with_description("Enable voice chat across entire server"),
        boolean(SERVER_SETTINGS, "ProximityChat", "Proximity Chat", "False")
            .with_description("Enable proximity-based voice chat"),
        boolean(SERVER_SETTINGS, "AllowThirdPersonPlayer", "Allow Third Person", "True")
            .with_description("Allow players to use third-person view"),
        boolean(SERVER_SETTINGS, "AlwaysNotifyPlayerLeft", "Notify Player Left", "False")
            .with_description("Show notification when player leaves"),
        boolean(SERVER_SETTINGS, "AlwaysNotifyPlayerJoined", "Notify Player Joined", "False")
            .with_description("Show notification when player joins"),
        boolean(SERVER_SETTINGS, "ShowMapPlayerLocation", "Show Player Location on Map", "True")
            .with_description("Display player position on map"),
        boolean(SERVER_SETTINGS, "ServerCrosshair", "Enable Crosshair", "True")
            .with_description("Show crosshair on screen"),
        boolean(SERVER_SETTINGS, "ServerForceNoHud", "Force No HUD", "False")
            .with_description("Disable HUD for all players"),
        boolean(SERVER_SETTINGS, "EnablePvPGamma", "Enable PvP Gamma", "False")
            .with_description("Allow gamma adjustment in PvP"),
        boolean(SERVER_SETTINGS, "DisablePvEGamma", "Disable PvE Gamma", "False")
            .with_description("Prevent gamma adjustment in PvE"),
    ]
}

fn difficulty() -> Vec<FieldSchema> {
    vec![
        number(SERVER_SETTINGS, "DifficultyOffset", "Difficulty Offset", "1.0")
            .with_range(0.0, 1.0)
            .with_step(0.1)
            .with_description("Base difficulty (0.0-1.0)"),
        number(SERVER_SETTINGS, "OverrideOfficialDifficulty", "Override Official Difficulty", "5.0")
            .with_range(1.0, 10.0)
            .with_step(0.5)
            .with_description("Maximum creature level scaling (1-10)"),
        number(SERVER_SETTINGS, "MaxTribeLogs", "Max Tribe Logs", "100")
            .with_range(10.0, 1000.0)
            .with_description("Maximum tribe log entries"),
    ]
}

fn prevention() -> Vec<FieldSchema> {
    vec![
        boolean(SERVER_SETTINGS, "NoTributeDownloads", "No Tribute Downloads", "False")
            .with_description("Prevent downloading items from obelisks"),
        boolean(SERVER_SETTINGS, "PreventDownloadSurvivors", "Prevent Download Survivors", "False")
            .with_description("Block survivor downloads from cloud"),
        boolean(SERVER_SETTINGS, "PreventUploadSurvivors", "Prevent Upload Survivors", "False")
            .with_description("Block survivor uploads to cloud"),
        boolean(SERVER_SETTINGS, "PreventDownloadItems", "Prevent Download Items", "False")
            .with_description("Block item downloads from cloud"),
        boolean(SERVER_SETTINGS, "PreventUploadItems", "Prevent Upload Items", "False")
            .with_description("Block item uploads to cloud"),
        boolean(SERVER_SETTINGS, "PreventDownloadDinos", "Prevent Download Dinos", "False")
            .with_description("Block dino downloads from cloud"),
        boolean(SERVER_SETTINGS, "PreventUploadDinos", "Prevent Upload Dinos", "False")
            .with_description("Block dino uploads to cloud"),
    ]
}

fn player_stats() -> Vec<FieldSchema> {
    vec![
        number(SERVER_SETTINGS, "PlayerCharacterHealthRecoveryMultiplier", "Health Recovery", "1.0")
            .with_range(0.1, 10.0)
            .with_step(0.1)
            .with_description("Multiplier for player health regeneration"),
        number(SERVER_SETTINGS, "PlayerCharacterStaminaRecoveryMultiplier", "Stamina Recovery", "1.0")
            .with_range(0.1, 10.0)
            .with_step(0.1)
            .with_description("Multiplier for stamina regeneration"),
        number(SERVER_SETTINGS, "PlayerCharacterWaterDrainMultiplier", "Water Drain", "1.0")
            .with_range(0.1, 10.0)
            .with_step(0.1)
            .with_description("How fast players get thirsty"),
        number(SERVER_SETTINGS, "PlayerCharacterFoodDrainMultiplier", "Food Drain", "1.0")
            .with_range(0.1, 10.0)
            .with_step(0.1)
            .with_description("How fast players get hungry"),
        number(SERVER_SETTINGS, "PlayerDamageMultiplier", "Player Damage", "1.0")
            .with_range(0.1, 10.0)
            .with_step(0.1)
            .with_description("Damage dealt by players"),
        number(SERVER_SETTINGS, "PlayerResistanceMultiplier", "Player Resistance", "1.0")
            .with_range(0.1, 10.0)
            .with_step(0.1)
            .with_description("Damage resistance for players"),
    ]
}

fn dino_stats() -> Vec<FieldSchema> {
    vec![
        number(SERVER_SETTINGS, "DinoCharacterHealthRecoveryMultiplier", "Dino Health Recovery", "1.0")
            .with_range(0.1, 10.0)
            .with_step(0.1)
            .with_description("Dino health regeneration rate"),
        number(SERVER_SETTINGS, "DinoCharacterStaminaDrainMultiplier", "Dino Stamina Drain", "1.0")
            .with_range(0.1, 10.0)
            .with_step(0.1)
            .with_description("How fast dinos lose stamina"),
        number(SERVER_SETTINGS, "DinoCharacterFoodDrainMultiplier", "Dino Food Drain", "1.0")
            .with_range(0.1, 10.0)
            .with_step(0.1)
            .with_description("How fast dinos get hungry"),
        number(SERVER_SETTINGS, "DinoDamageMultiplier", "Dino Damage", "1.0")
            .with_range(0.1, 10.0)
            .with_step(0.1)
            .with_description("Damage dealt by tamed dinos"),
        number(SERVER_SETTINGS, "DinoResistanceMultiplier", "Dino Resistance", "1.0")
            .with_range(0.1, 10.0)
            .with_step(0.1)
            .with_description("Damage resistance for tamed dinos"),
        number(SERVER_SETTINGS, "DinoCountMultiplier", "Dino Spawn Count", "1.0")
            .with_range(0.1, 5.0)
            .with_step(0.1)
            .with_description("Number of dinos that spawn"),
        number(SERVER_SETTINGS, "MaxPersonalTamedDinos", "Max Tamed Dinos (Personal)", "500")
            .with_range(1.0, 10000.0)
            .with_description("Max dinos per player/tribe member"),
        number(SERVER_SETTINGS, "MaxTamedDinos", "Max Tamed Dinos (Server)", "5000")
            .with_range(1.0, 50000.0)
            .with_description("Max total tamed dinos on server"),
    ]
}

fn harvesting() -> Vec<FieldSchema> {
    vec![
        number(SERVER_SETTINGS, "HarvestAmountMultiplier", "Harvest Amount", "1.0")
            .with_range(0.1, 100.0)
            .with_step(0.1)
            .with_description("Resources gathered per action"),
        number(SERVER_SETTINGS, "HarvestHealthMultiplier", "Harvest Node Health", "1.0")
            .with_range(0.1, 10.0)
            .with_step(0.1)
            .with_description("Health of harvestable nodes"),
        number(SERVER_SETTINGS, "ResourcesRespawnPeriodMultiplier", "Resource Respawn Speed", "1.0")
            .with_range(0.1, 10.0)
            .with_step(0.1)
            .with_description("How fast resources respawn (lower = faster)"),
        boolean(SERVER_SETTINGS, "ClampResourceHarvestDamage", "Clamp Resource Harvest Damage", "False")
            .with_description("Limit damage dealt to harvestable resources"),
    ]
}

fn xp_leveling() -> Vec<FieldSchema> {
    vec![
        number(SERVER_SETTINGS, "XPMultiplier", "XP Multiplier", "1.0")
            .with_range(0.1, 100.0)
            .with_step(0.1)
            .with_description("Experience gain rate"),
        number(SERVER_SETTINGS, "PlayerLevelCapMultiplier", "Player Level Cap Multiplier", "1.0")
            .with_range(1.0, 10.0)
            .with_step(0.1)
            .with_description("Multiply the max player level"),
    ]
}

fn taming() -> Vec<FieldSchema> {
    vec![
        number(SERVER_SETTINGS, "TamingSpeedMultiplier", "Taming Speed", "1.0")
            .with_range(0.1, 100.0)
            .with_step(0.1)
            .with_description("Speed of taming process"),
        number(SERVER_SETTINGS, "DinoTurretDamageMultiplier", "Dino Turret Damage", "1.0")
            .with_range(0.1, 10.0)
            .with_step(0.1)
            .with_description("Damage from auto turrets to dinos"),
    ]
}

fn breeding() -> Vec<FieldSchema> {
    vec![
        number(SERVER_SETTINGS, "MatingIntervalMultiplier", "Mating Interval", "1.0")
            .with_range(0.01, 100.0)
            .with_step(0.1)
            .with_description("Time between mating (lower = faster)"),
        number(SERVER_SETTINGS, "EggHatchSpeedMultiplier", "Egg Hatch Speed", "1.0")
            .with_range(0.01, 100.0)
            .with_step(0.1)
            .with_description("How fast eggs hatch"),
        number(SERVER_SETTINGS, "BabyMatureSpeedMultiplier", "Baby Mature Speed", "1.0")
            .with_range(0.01, 100.0)
            .with_step(0.1)
            .with_description("How fast babies grow up"),
        number(SERVER_SETTINGS, "BabyCuddleIntervalMultiplier", "Cuddle Interval", "1.0")
            .with_range(0.01, 100.0)
            .with_step(0.1)
            .with_description("Time between imprint requests (lower = more frequent)"),
        number(SERVER_SETTINGS, "BabyCuddleGracePeriodMultiplier", "Cuddle Grace Period", "1.0")
            .with_range(0.1, 10.0)
            .with_step(0.1)
            .with_description("Time allowed to complete cuddle"),
        number(SERVER_SETTINGS, "BabyCuddleLoseImprintQualitySpeedMultiplier", "Cuddle Lose Imprint Speed", "1.0")
            .with_range(0.1, 10.0)
            .with_step(0.1)
            .with_description("Speed of losing imprint quality"),
        number(SERVER_SETTINGS, "BabyImprintingStatScaleMultiplier", "Imprinting Stat Scale", "1.0")
            .with_range(0.1, 10.0)
            .with_step(0.1)
            .with_description("Bonus stats from imprinting"),
        number(SERVER_SETTINGS, "LayEggIntervalMultiplier", "Lay Egg Interval", "1.0")
            .with_range(0.1, 10.0)
            .with_step(0.1)
            .with_description("Time between laying eggs (lower = more frequent)"),
    ]
}

fn environment() -> Vec<FieldSchema> {
    vec![
        number(SERVER_SETTINGS, "DayCycleSpeedScale", "Day Cycle Speed", "1.0")
            .with_range(0.1, 10.0)
            .with_step(0.1)
            .with_description("Speed of day/night cycle"),
        number(SERVER_SETTINGS, "DayTimeSpeedScale", "Day Time Speed", "1.0")
            .with_range(0.1, 10.0)
            .with_step(0.1)
            .with_description("Speed of daytime passage"),
        number(SERVER_SETTINGS, "NightTimeSpeedScale", "Night Time Speed", "1.0")
            .with_range(0.1, 10.0)
            .with_step(0.1)
            .with_description("Speed of nighttime passage"),
    ]
}

fn structure() -> Vec<FieldSchema> {
    vec![
        number(SERVER_SETTINGS, "PvEStructureDecayPeriodMultiplier", "Structure Decay Period (PvE)", "1.0")
            .with_range(0.0, 100.0)
            .with_step(0.1)
            .with_description("Time until structures decay in PvE (0 = disabled)"),
        number(SERVER_SETTINGS, "PvEStructureDecayDestructionPeriod", "Structure Decay Destruction (PvE)", "0")
            .with_range(0.0, 100000.0)
            .with_step(1.0)
            .with_description("Time until decayed structures are destroyed"),
        number(SERVER_SETTINGS, "StructureDamageMultiplier", "Structure Damage", "1.0")
            .with_range(0.1, 10.0)
            .with_step(0.1)
            .with_description("Damage dealt to structures"),
        number(SERVER_SETTINGS, "StructureResistanceMultiplier", "Structure Resistance", "1.0")
            .with_range(0.1, 10.0)
            .with_step(0.1)
            .with_description("Damage resistance of structures"),
        number(SERVER_SETTINGS, "NewMaxStructuresInRange", "Max Structures in Range", "6000")
            .with_range(1000.0, 100000.0)
            .with_description("Maximum structures within build radius"),
        number(SERVER_SETTINGS, "StructurePreventResourceRadiusMultiplier", "Structure Resource Radius", "1.0")
            .with_range(0.1, 3.0)
            .with_step(0.1)
            .with_description("Radius around structures where resources don't spawn"),
        number(SERVER_SETTINGS, "PlatformSaddleBuildAreaBoundsMultiplier", "Platform Build Area", "1.0")
            .with_range(0.1, 10.0)
            .with_step(0.1)
            .with_description("Platform saddle build area size"),
        number(SERVER_SETTINGS, "PerPlatformMaxStructuresMultiplier", "Platform Max Structures", "1.0")
            .with_range(0.1, 10.0)
            .with_step(0.1)
            .with_description("Max structures per platform"),
        number(SERVER_SETTINGS, "TribeSlotReplicationLimit", "Tribe Slot Limit", "0")
            .with_range(0.0, 500.0)
            .with_description("Maximum tribe slots (0 = no limit)"),
        boolean(SERVER_SETTINGS, "AutoDestroyDecayedDinos", "Auto Destroy Decayed Dinos", "False")
            .with_description("Automatically destroy unclaimed dinos"),
    ]
}

fn pvp_settings() -> Vec<FieldSchema> {
    vec![
        boolean(SERVER_SETTINGS, "PreventOfflinePvP", "Offline Raid Protection (ORP)", "False")
            .with_description("Enable offline raid protection"),
        number(SERVER_SETTINGS, "PreventOfflinePvPInterval", "ORP Activation Delay", "900")
            .with_range(0.0, 3600.0)
            .with_description("Seconds until ORP activates after logout"),
        boolean(SERVER_SETTINGS, "bPvPDinoDecay", "PvP Dino Decay", "False")
            .with_description("Enable dino decay in PvP"),
        boolean(SERVER_SETTINGS, "bPvPStructureDecay", "PvP Structure Decay", "False")
            .with_description("Enable structure decay in PvP"),
        number(SERVER_SETTINGS, "PvPZoneStructureDamageMultiplier", "PvP Zone Structure Damage", "1.0")
            .with_range(0.1, 10.0)
            .with_step(0.1)
            .with_description("Structure damage multiplier in PvP zones"),
        boolean(SERVER_SETTINGS, "PreventTribeAlliances", "Prevent Tribe Alliances", "False")
            .with_description("Disable tribe alliance system"),
        boolean(SERVER_SETTINGS, "AllowRaidDinoFeeding", "Allow Raid Dino Feeding", "False")
            .with_description("Allow feeding of Titanosaur/Raid dinos"),
        number(SERVER_SETTINGS, "RaidDinoCharacterFoodDrainMultiplier", "Raid Dino Food Drain", "1.0")
            .with_range(0.1, 10.0)
            .with_step(0.1)
            .with_description("Food drain for raid dinos"),
    ]
}

fn admin_settings() -> Vec<FieldSchema> {
    vec![
        boolean(SERVER_SETTINGS, "AdminLogging", "Admin Logging", "False")
            .with_description("Log all admin commands"),
        number(SERVER_SETTINGS, "AutoSavePeriodMinutes", "Auto Save Interval (minutes)", "15")
            .with_range(1.0, 120.0)
            .with_description("Minutes between auto-saves"),
        boolean(SERVER_SETTINGS, "AllowHideDamageSourceFromLogs", "Hide Damage Source in Logs", "False")
            .with_description("Hide damage source from tribe logs"),
        boolean(SERVER_SETTINGS, "ShowFloatingDamageText", "Show Floating Damage Text", "False")
            .with_description("Display damage numbers"),
        boolean(SERVER_SETTINGS, "EnableDeathTeamSpectator", "Death Team Spectator", "False")
            .with_description("Spectate tribe mates after death"),
        boolean(SERVER_SETTINGS, "bDisableGenesisMissions", "Disable Genesis Missions", "False")
            .with_description("Disable Genesis map missions"),
        boolean(SERVER_SETTINGS, "AllowHitMarkers", "Allow Hit Markers", "True")
            .with_description("Show hit marker indicators"),
    ]
}

fn loot_settings() -> Vec<FieldSchema> {
    vec![
        number(SERVER_SETTINGS, "SupplyCrateLootQualityMultiplier", "Supply Crate Quality", "1.0")
            .with_range(0.1, 10.0)
            .with_step(0.1)
            .with_description("Quality of items in supply drops"),
        number(SERVER_SETTINGS, "FishingLootQualityMultiplier", "Fishing Loot Quality", "1.0")
            .with_range(0.1, 10.0)
            .with_step(0.1)
            .with_description("Quality of fishing rewards"),
        number(SERVER_SETTINGS, "CraftingSkillBonusMultiplier", "Crafting Skill Bonus", "1.0")
            .with_range(0.1, 10.0)
            .with_step(0.1)
            .with_description("Crafting skill effectiveness"),
        number(SERVER_SETTINGS, "ItemStackSizeMultiplier", "Item Stack Size", "1.0")
            .with_range(1.0, 100.0)
            .with_step(0.1)
            .with_description("Multiplier for stack sizes"),
        number(SERVER_SETTINGS, "ResourceNoReplenishRadiusStructures", "Resource No-Spawn Radius", "1.0")
            .with_range(0.0, 5.0)
            .with_step(0.1)
            .with_description("Radius where resources don't respawn near structures"),
        boolean(SERVER_SETTINGS, "RandomSupplyCratePoints", "Random Supply Crate Points", "False")
            .with_description("Randomize supply drop locations"),
    ]
}

fn timers() -> Vec<FieldSchema> {
    vec![
        number(SERVER_SETTINGS, "GlobalSpoilingTimeMultiplier", "Spoiling Time", "1.0")
            .with_range(0.1, 100.0)
            .with_step(0.1)
            .with_description("How long items take to spoil (higher = longer)"),
        number(SERVER_SETTINGS, "GlobalItemDecompositionTimeMultiplier", "Item Decomposition Time", "1.0")
            .with_range(0.1, 100.0)
            .with_step(0.1)
            .with_description("How long dropped items last"),
        number(SERVER_SETTINGS, "GlobalCorpseDecompositionTimeMultiplier", "Corpse Decomposition Time", "1.0")
            .with_range(0.1, 100.0)
            .with_step(0.1)
            .with_description("How long corpses last"),
        number(SERVER_SETTINGS, "CropDecaySpeedMultiplier", "Crop Decay Speed", "1.0")
            .with_range(0.1, 10.0)
            .with_step(0.1)
            .with_description("Speed of crop decay"),
        number(SERVER_SETTINGS, "CropGrowthSpeedMultiplier", "Crop Growth Speed", "1.0")
            .with_range(0.1, 10.0)
            .with_step(0.1)
            .with_description("Speed of crop growth"),
        number(SERVER_SETTINGS, "DinoDecayPeriodMultiplier", "Dino Decay Period", "1.0")
            .with_range(0.1, 100.0)
            .with_step(0.1)
            .with_description("Time until unclaimed dinos decay"),
        number(SERVER_SETTINGS, "PoopIntervalMultiplier", "Poop Interval", "1.0")
            .with_range(0.1, 10.0)
            .with_step(0.1)
            .with_description("Dino poop frequency (lower = more poop)"),
    ]
}

fn engrams() -> Vec<FieldSchema> {
    vec![
        boolean(SERVER_SETTINGS, "bAutoUnlockAllEngrams", "Auto Unlock All Engrams", "False")
            .with_description("Automatically unlock all engrams"),
        boolean(SERVER_SETTINGS, "bAllowUnlimitedRespecs", "Unlimited Respecs", "False")
            .with_description("Allow unlimited mindwipes"),
        boolean(SERVER_SETTINGS, "bOnlyAllowSpecifiedEngrams", "Only Specified Engrams", "False")
            .with_description("Restrict to specified engrams only"),
        boolean(SERVER_SETTINGS, "UseCorpseLocator", "Use Corpse Locator", "False")
            .with_description("Enable corpse locator beam"),
    ]
}

fn flyer_settings() -> Vec<FieldSchema> {
    vec![
        boolean(SERVER_SETTINGS, "bFlyerPlatformAllowUnalignedDinoBasing", "Flyer Platform Allow Unaligned Dinos", "False")
            .with_description("Allow dinos on flyer platforms while moving"),
        boolean(SERVER_SETTINGS, "bDisablePhotoMode", "Disable Photo Mode", "False")
            .with_description("Disable the photo mode feature"),
        boolean(SERVER_SETTINGS, "AllowFlyingStaminaRecovery", "Flying Stamina Recovery", "False")
            .with_description("Allow stamina recovery while flying"),
        number(SERVER_SETTINGS, "OxygenSwimSpeedStatMultiplier", "Oxygen Swim Speed", "1.0")
            .with_range(0.0, 10.0)
            .with_step(0.1)
            .with_description("Effect of oxygen on swim speed"),
    ]
}

fn wild_dino() -> Vec<FieldSchema> {
    vec![
        number(SERVER_SETTINGS, "WildDinoCharacterFoodDrainMultiplier", "Wild Dino Food Drain", "1.0")
            .with_range(0.1, 10.0)
            .with_step(0.1)
            .with_description("Wild dino food consumption rate"),
        number(SERVER_SETTINGS, "WildDinoTorporDrainMultiplier", "Wild Dino Torpor Drain", "1.0")
            .with_range(0.1, 10.0)
            .with_step(0.1)
            .with_description("Wild dino torpor drain rate"),
        boolean(SERVER_SETTINGS, "PassiveDefensesDamageRiderlessDinos", "Passive Defense vs Riderless Dinos", "False")
            .with_description("Passive defenses damage riderless dinos"),
        boolean(SERVER_SETTINGS, "DestroyUnconnectedWaterPipes", "Destroy Unconnected Pipes", "False")
            .with_description("Auto-destroy unconnected water pipes"),
    ]
}

fn game_multipliers() -> Vec<FieldSchema> {
    vec![
        number(GAME_MODE, "XPMultiplier", "XP Multiplier", "1.0")
            .with_range(0.1, 100.0)
            .with_step(0.1)
            .with_description("Overall XP gain rate"),
        number(GAME_MODE, "TamingSpeedMultiplier", "Taming Speed", "1.0")
            .with_range(0.1, 100.0)
            .with_step(0.1)
            .with_description("Taming process speed"),
        number(GAME_MODE, "HarvestAmountMultiplier", "Harvest Amount", "1.0")
            .with_range(0.1, 100.0)
            .with_step(0.1)
            .with_description("Resources per harvest action"),
        number(GAME_MODE, "CaveDamageMultiplier", "Cave Damage", "1.0")
            .with_range(0.1, 10.0)
            .with_step(0.1)
            .with_description("Damage multiplier inside caves"),
        number(GAME_MODE, "KillXPMultiplier", "Kill XP Multiplier", "1.0")
            .with_range(0.1, 100.0)
            .with_step(0.1)
            .with_description("XP gained from kills"),
        number(GAME_MODE, "HarvestXPMultiplier", "Harvest XP Multiplier", "1.0")
            .with_range(0.1, 100.0)
            .with_step(0.1)
            .with_description("XP gained from harvesting"),
        number(GAME_MODE, "CraftXPMultiplier", "Craft XP Multiplier", "1.0")
            .with_range(0.1, 100.0)
            .with_step(0.1)
            .with_description("XP gained from crafting"),
        number(GAME_MODE, "GenericXPMultiplier", "Generic XP Multiplier", "1.0")
            .with_range(0.1, 100.0)
            .with_step(0.1)
            .with_description("XP from misc actions"),
        number(GAME_MODE, "SpecialXPMultiplier", "Special XP Multiplier", "1.0")
            .with_range(0.1, 100.0)
            .with_step(0.1)
            .with_description("XP from explorer notes, etc."),
    ]
}

fn game_breeding() -> Vec<FieldSchema> {
    vec![
        number(GAME_MODE, "MatingIntervalMultiplier", "Mating Interval", "1.0")
            .with_range(0.01, 100.0)
            .with_step(0.1)
            .with_description("Cooldown between mating"),
        number(GAME_MODE, "EggHatchSpeedMultiplier", "Egg Hatch Speed", "1.0")
            .with_range(0.01, 100.0)
            .with_step(0.1)
            .with_description("Egg incubation speed"),
        number(GAME_MODE, "BabyMatureSpeedMultiplier", "Baby Mature Speed", "1.0")
            .with_range(0.01, 100.0)
            .with_step(0.1)
            .with_description("Baby growth rate"),
        number(GAME_MODE, "BabyCuddleIntervalMultiplier", "Cuddle Interval", "1.0")
            .with_range(0.01, 100.0)
            .with_step(0.1)
            .with_description("Time between cuddles"),
        number(GAME_MODE, "BabyCuddleGracePeriodMultiplier", "Cuddle Grace Period", "1.0")
            .with_range(0.1, 10.0)
            .with_step(0.1)
            .with_description("Time allowed for cuddle"),
        number(GAME_MODE, "BabyCuddleLoseImprintQualitySpeedMultiplier", "Imprint Loss Speed", "1.0")
            .with_range(0.1, 10.0)
            .with_step(0.1)
            .with_description("Speed of losing imprint"),
        number(GAME_MODE, "BabyImprintingStatScaleMultiplier", "Imprinting Stat Scale", "1.0")
            .with_range(0.1, 10.0)
            .with_step(0.1)
            .with_description("Stat bonus from imprinting"),
        number(GAME_MODE, "BabyFoodConsumptionSpeedMultiplier", "Baby Food Consumption", "1.0")
            .with_range(0.01, 10.0)
            .with_step(0.1)
            .with_description("Baby food drain rate"),
    ]
}

fn game_player_stats() -> Vec<FieldSchema> {
    vec![
        number(GAME_MODE, "PerLevelStatsMultiplier_Player[0]", "Health per Level (Player)", "1.0")
            .with_range(0.1, 10.0)
            .with_step(0.1)
            .with_description("Health gained per level"),
        number(GAME_MODE, "PerLevelStatsMultiplier_Player[1]", "Stamina per Level (Player)", "1.0")
            .with_range(0.1, 10.0)
            .with_step(0.1)
            .with_description("Stamina gained per level"),
        number(GAME_MODE, "PerLevelStatsMultiplier_Player[2]", "Torpidity per Level (Player)", "1.0")
            .with_range(0.1, 10.0)
            .with_step(0.1)
            .with_description("Torpidity per level"),
        number(GAME_MODE, "PerLevelStatsMultiplier_Player[3]", "Oxygen per Level (Player)", "1.0")
            .with_range(0.1, 10.0)
            .with_step(0.1)
            .with_description("Oxygen gained per level"),
        number(GAME_MODE, "PerLevelStatsMultiplier_Player[4]", "Food per Level (Player)", "1.0")
            .with_range(0.1, 10.0)
            .with_step(0.1)
            .with_description("Food capacity per level"),
        number(GAME_MODE, "PerLevelStatsMultiplier_Player[5]", "Water per Level (Player)", "1.0")
            .with_range(0.1, 10.0)
            .with_step(0.1)
            .with_description("Water capacity per level"),
        number(GAME_MODE, "PerLevelStatsMultiplier_Player[7]", "Weight per Level (Player)", "1.0")
            .with_range(0.1, 10.0)
            .with_step(0.1)
            .with_description("Weight capacity per level"),
        number(GAME_MODE, "PerLevelStatsMultiplier_Player[8]", "Melee per Level (Player)", "1.0")
            .with_range(0.1, 10.0)
            .with_step(0.1)
            .with_description("Melee damage per level"),
        number(GAME_MODE, "PerLevelStatsMultiplier_Player[9]", "Speed per Level (Player)", "1.0")
            .with_range(0.1, 10.0)
            .with_step(0.1)
            .with_description("Speed increase per level"),
        number(GAME_MODE, "PerLevelStatsMultiplier_Player[10]", "Fortitude per Level (Player)", "1.0")
            .with_range(0.1, 10.0)
            .with_step(0.1)
            .with_description("Fortitude per level"),
        number(GAME_MODE, "PerLevelStatsMultiplier_Player[11]", "Crafting per Level (Player)", "1.0")
            .with_range(0.1, 10.0)
            .with_step(0.1)
            .with_description("Crafting skill per level"),
    ]
}

fn game_dino_tamed_stats() -> Vec<FieldSchema> {
    vec![
        number(GAME_MODE, "PerLevelStatsMultiplier_DinoTamed[0]", "Health per Level (Tamed)", "1.0")
            .with_range(0.1, 10.0)
            .with_step(0.1)
            .with_description("Tamed dino health per level"),
        number(GAME_MODE, "PerLevelStatsMultiplier_DinoTamed[1]", "Stamina per Level (Tamed)", "1.0")
            .with_range(0.1, 10.0)
            .with_step(0.1)
            .with_description("Tamed dino stamina per level"),
        number(GAME_MODE, "PerLevelStatsMultiplier_DinoTamed[3]", "Oxygen per Level (Tamed)", "1.0")
            .with_range(0.1, 10.0)
            .with_step(0.1)
            .with_description("Tamed dino oxygen per level"),
        number(GAME_MODE, "PerLevelStatsMultiplier_DinoTamed[4]", "Food per Level (Tamed)", "1.0")
            .with_range(0.1, 10.0)
            .with_step(0.1)
            .with_description("Tamed dino food per level"),
        number(GAME_MODE, "PerLevelStatsMultiplier_DinoTamed[7]", "Weight per Level (Tamed)", "1.0")
            .with_range(0.1, 10.0)
            .with_step(0.1)
            .with_description("Tamed dino weight per level"),
        number(GAME_MODE, "PerLevelStatsMultiplier_DinoTamed[8]", "Melee per Level (Tamed)", "1.0")
            .with_range(0.1, 10.0)
            .with_step(0.1)
            .with_description("Tamed dino melee per level"),
        number(GAME_MODE, "PerLevelStatsMultiplier_DinoTamed[9]", "Speed per Level (Tamed)", "1.0")
            .with_range(0.1, 10.0)
            .with_step(0.1)
            .with_description("Tamed dino speed per level"),
    ]
}

fn game_dino_wild_stats() -> Vec<FieldSchema> {
    vec![
        number(GAME_MODE, "PerLevelStatsMultiplier_DinoWild[0]", "Health per Level (Wild)", "1.0")
            .with_range(0.1, 10.0)
            .with_step(0.1)
            .with_description("Wild dino health per level"),
        number(GAME_MODE, "PerLevelStatsMultiplier_DinoWild[1]", "Stamina per Level (Wild)", "1.0")
            .with_range(0.1, 10.0)
            .with_step(0.1)
            .with_description("Wild dino stamina per level"),
        number(GAME_MODE, "PerLevelStatsMultiplier_DinoWild[3]", "Oxygen per Level (Wild)", "1.0")
            .with_range(0.1, 10.0)
            .with_step(0.1)
            .with_description("Wild dino oxygen per level"),
        number(GAME_MODE, "PerLevelStatsMultiplier_DinoWild[4]", "Food per Level (Wild)", "1.0")
            .with_range(0.1, 10.0)
            .with_step(0.1)
            .with_description("Wild dino food per level"),
        number(GAME_MODE, "PerLevelStatsMultiplier_DinoWild[7]", "Weight per Level (Wild)", "1.0")
            .with_range(0.1, 10.0)
            .with_step(0.1)
            .with_description("Wild dino weight per level"),
        number(GAME_MODE, "PerLevelStatsMultiplier_DinoWild[8]", "Melee per Level (Wild)", "1.0")
            .with_range(0.1, 10.0)
            .with_step(0.1)
            .with_description("Wild dino melee per level"),
    ]
}

fn game_advanced_options() -> Vec<FieldSchema> {
    vec![
        boolean(GAME_MODE, "bAllowCustomRecipes", "Allow Custom Recipes", "True")
            .with_description("Allow players to create custom recipes"),
        boolean(GAME_MODE, "bPassiveDefensesDamageRiderlessDinos", "Turrets Damage Riderless Dinos", "False")
            .with_description("Auto-turrets damage unclaimed dinos"),
        boolean(GAME_MODE, "bDisableFriendlyFire", "Disable Friendly Fire", "False")
            .with_description("Prevent damage to tribe mates"),
        boolean(GAME_MODE, "bPvEDisableFriendlyFire", "PvE Disable Friendly Fire", "False")
            .with_description("Prevent friendly fire in PvE"),
        boolean(GAME_MODE, "bAllowUnlimitedRespecs", "Unlimited Respecs", "False")
            .with_description("Allow unlimited mindwipes"),
        number(GAME_MODE, "MaxNumberOfPlayersInTribe", "Max Players per Tribe", "0")
            .with_range(0.0, 500.0)
            .with_description("Max tribe size (0 = no limit)"),
        number(GAME_MODE, "GlobalPoweredBatteryDurabilityDecreasePerSecond", "Battery Drain Rate", "4.0")
            .with_range(0.0, 10.0)
            .with_step(0.01)
            .with_description("Battery power drain per second"),
        number(GAME_MODE, "FuelConsumptionIntervalMultiplier", "Fuel Consumption Rate", "1.0")
            .with_range(0.1, 10.0)
            .with_step(0.1)
            .with_description("Fuel consumption multiplier"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_slots_are_unique_per_schema() {
        for variant in [GameVariant::Ase, GameVariant::Asa] {
            for groups in [game_user_settings_groups(variant), game_ini_groups(variant)] {
                let mut seen = HashSet::new();
                for field in groups.iter().flat_map(|g| g.fields.iter()) {
                    assert!(
                        seen.insert((field.section, field.key)),
                        "duplicate slot {}/{} for {}",
                        field.section,
                        field.key,
                        variant
                    );
                }
            }
        }
    }

    #[test]
    fn test_defaults_pass_validation() {
        for variant in [GameVariant::Ase, GameVariant::Asa] {
            for groups in [game_user_settings_groups(variant), game_ini_groups(variant)] {
                for field in groups.iter().flat_map(|g| g.fields.iter()) {
                    if let Some(default) = field.default_value {
                        assert!(field.validate(default).is_ok(), "default of {} is invalid", field.key);
                    }
                }
            }
        }
    }

    #[test]
    fn test_asa_extras() {
        let asa = game_user_settings_groups(GameVariant::Asa);
        let ase = game_user_settings_groups(GameVariant::Ase);
        let has = |groups: &[ConfigGroup], key: &str| {
            groups.iter().flat_map(|g| g.fields.iter()).any(|f| f.key == key)
        };
        assert!(has(&asa, "RCONPort"));
        assert!(has(&asa, "EnableCryopodNerf"));
        assert!(!has(&ase, "RCONPort"));
        assert!(has(&ase, "AllowCaveBuildingPvE"));
        assert_eq!(asa.len(), ase.len());
    }
}
