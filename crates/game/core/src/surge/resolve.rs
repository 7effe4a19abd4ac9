use super::{ModifierSet, SurgeCard};

/// Resolve both sides' card selections into their modifier sets.
///
/// The pair is resolved together because cards act across sides: a nullify
/// card erases the opponent's selection before anything else is applied. If
/// both sides play nullify, both cards cancel and neither side gains anything.
pub fn resolve_modifiers(cards: [Option<SurgeCard>; 2]) -> [ModifierSet; 2] {
    let nullified = [
        cards[1].is_some_and(SurgeCard::nullifies_opponent),
        cards[0].is_some_and(SurgeCard::nullifies_opponent),
    ];

    let resolve = |card: Option<SurgeCard>, nullified: bool| match card {
        Some(card) if !nullified => ModifierSet::from_card(card),
        _ => ModifierSet::IDENTITY,
    };

    [
        resolve(cards[0], nullified[0]),
        resolve(cards[1], nullified[1]),
    ]
}
