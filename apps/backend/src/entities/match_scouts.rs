use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::domain::coverage::{Mode, Submode};

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "scout_mode")]
pub enum ScoutMode {
    #[sea_orm(string_value = "ATTACK")]
    Attack,
    #[sea_orm(string_value = "DEFENCE")]
    Defence,
    #[sea_orm(string_value = "ATTACK_DEFENCE")]
    AttackDefence,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "scout_submode")]
pub enum ScoutSubmode {
    #[sea_orm(string_value = "ALL_RULES")]
    AllRules,
    #[sea_orm(string_value = "ANY_RULES")]
    AnyRules,
    #[sea_orm(string_value = "OUR_RULES")]
    OurRules,
    #[sea_orm(string_value = "NOT_OUR_RULES")]
    NotOurRules,
    #[sea_orm(string_value = "PLAYS")]
    Plays,
}

impl From<Mode> for ScoutMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Attack => Self::Attack,
            Mode::Defence => Self::Defence,
            Mode::AttackDefence => Self::AttackDefence,
        }
    }
}

impl From<ScoutMode> for Mode {
    fn from(mode: ScoutMode) -> Self {
        match mode {
            ScoutMode::Attack => Self::Attack,
            ScoutMode::Defence => Self::Defence,
            ScoutMode::AttackDefence => Self::AttackDefence,
        }
    }
}

impl From<Submode> for ScoutSubmode {
    fn from(submode: Submode) -> Self {
        match submode {
            Submode::AllRules => Self::AllRules,
            Submode::AnyRules => Self::AnyRules,
            Submode::OurRules => Self::OurRules,
            Submode::NotOurRules => Self::NotOurRules,
            Submode::Plays => Self::Plays,
        }
    }
}

impl From<ScoutSubmode> for Submode {
    fn from(submode: ScoutSubmode) -> Self {
        match submode {
            ScoutSubmode::AllRules => Self::AllRules,
            ScoutSubmode::AnyRules => Self::AnyRules,
            ScoutSubmode::OurRules => Self::OurRules,
            ScoutSubmode::NotOurRules => Self::NotOurRules,
            ScoutSubmode::Plays => Self::Plays,
        }
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "match_scouts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_name = "match_id")]
    pub match_id: Uuid,
    #[sea_orm(primary_key, auto_increment = false, column_name = "account_id")]
    pub account_id: String,
    pub mode: ScoutMode,
    pub submode: ScoutSubmode,
    #[sea_orm(column_name = "finished_at")]
    pub finished_at: Option<OffsetDateTime>,
    #[sea_orm(column_name = "created_at")]
    pub created_at: OffsetDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::matches::Entity",
        from = "Column::MatchId",
        to = "super::matches::Column::Id"
    )]
    Match,
}

impl Related<super::matches::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Match.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
