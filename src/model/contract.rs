use serde::{Deserialize, Serialize};

use super::campaign_state::{CampaignState, CurrencyError};
use crate::id::ContractId;

/// How much say the employer has over the player's force assignments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum CommandRights {
    Integrated,
    House,
    Liaison,
    Independent,
}

string_enum!(CommandRights {
    Integrated => "integrated",
    House => "house",
    Liaison => "liaison",
    Independent => "independent",
});

impl CommandRights {
    /// Under integrated command the employer commits forces without asking.
    pub fn auto_commits_forces(self) -> bool {
        match self {
            CommandRights::Integrated => true,
            CommandRights::House | CommandRights::Liaison | CommandRights::Independent => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contract {
    pub id: ContractId,
    pub name: String,
    pub required_lances: u32,
    pub command_rights: CommandRights,
    pub active: bool,
    pub bonus_parts: u32,
    /// Track state; `None` until the contract is initialized for play.
    pub stratcon: Option<CampaignState>,
}

impl Contract {
    pub fn new(
        id: ContractId,
        name: String,
        required_lances: u32,
        command_rights: CommandRights,
    ) -> Self {
        Self {
            id,
            name,
            required_lances,
            command_rights,
            active: true,
            bonus_parts: 0,
            stratcon: None,
        }
    }

    /// Spend one support point for one bonus part.
    pub fn convert_support_point_to_bonus_part(&mut self) -> Result<(), CurrencyError> {
        let state = self
            .stratcon
            .as_mut()
            .ok_or(CurrencyError::NoCampaignState(self.id))?;
        state.use_support_point()?;
        self.bonus_parts += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_integrated_auto_commits() {
        assert!(CommandRights::Integrated.auto_commits_forces());
        assert!(!CommandRights::House.auto_commits_forces());
        assert!(!CommandRights::Liaison.auto_commits_forces());
        assert!(!CommandRights::Independent.auto_commits_forces());
    }

    #[test]
    fn bonus_part_costs_a_support_point() {
        let mut contract =
            Contract::new(ContractId(1), "Garrison".to_string(), 3, CommandRights::House);
        assert!(matches!(
            contract.convert_support_point_to_bonus_part(),
            Err(CurrencyError::NoCampaignState(ContractId(1)))
        ));

        let mut state = CampaignState::new(contract.id);
        state.add_support_points(1);
        contract.stratcon = Some(state);

        contract.convert_support_point_to_bonus_part().unwrap();
        assert_eq!(contract.bonus_parts, 1);
        assert!(contract.convert_support_point_to_bonus_part().is_err());
        assert_eq!(contract.bonus_parts, 1);
    }
}
