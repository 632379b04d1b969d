use std::collections::BTreeSet;

use crate::data::creature::{Creature, Roster};
use crate::data::type_chart::TypeAdvantageIndex;
use crate::error::{Result, TeamError};

/// Union of the strong-against sets of every member's types.
pub fn compute_coverage<'a>(
    team: &[usize],
    roster: &Roster,
    index: &'a TypeAdvantageIndex,
) -> Result<BTreeSet<&'a str>> {
    let mut covered = BTreeSet::new();
    for &member in team {
        let creature = roster.get(member).ok_or_else(|| TeamError::InvalidRow {
            source_name: "roster".to_string(),
            row: member,
            message: "team member is not on the roster".to_string(),
        })?;
        extend_with_creature(&mut covered, creature, index)?;
    }
    Ok(covered)
}

fn extend_with_creature<'a>(
    covered: &mut BTreeSet<&'a str>,
    creature: &Creature,
    index: &'a TypeAdvantageIndex,
) -> Result<()> {
    for type_name in creature.types() {
        covered.extend(index.advantages_of(type_name)?.iter().map(String::as_str));
    }
    Ok(())
}
