//! State machine for the "create your own roll" configurator.
//!
//! The builder walks four steps (base, mix-ins, drizzle, toppings). Step
//! navigation and selection edits are independent: moving between steps never
//! touches the selection, and picking an option never moves the step.

use super::options::{Base, Choice, Drizzle, MixIn, MultiChoice, SingleChoice, Topping};

/// Score contributed by each filled field.
const FIELD_WEIGHT: u8 = 25;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WizardStep {
    #[default]
    Base,
    Mixins,
    Drizzle,
    Toppings,
}

impl WizardStep {
    pub const ALL: [WizardStep; 4] = [
        WizardStep::Base,
        WizardStep::Mixins,
        WizardStep::Drizzle,
        WizardStep::Toppings,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn is_first(self) -> bool {
        self == WizardStep::Base
    }

    pub fn is_last(self) -> bool {
        self == WizardStep::Toppings
    }
}

/// The in-progress custom dessert.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DessertSelection {
    pub base: Option<Base>,
    /// Insertion ordered, no duplicates.
    pub mixins: Vec<MixIn>,
    pub drizzle: Option<Drizzle>,
    /// Insertion ordered, no duplicates.
    pub toppings: Vec<Topping>,
}

impl DessertSelection {
    pub fn is_selected(&self, choice: Choice) -> bool {
        match choice {
            Choice::Base(base) => self.base == Some(base),
            Choice::MixIn(mixin) => self.mixins.contains(&mixin),
            Choice::Drizzle(drizzle) => self.drizzle == Some(drizzle),
            Choice::Topping(topping) => self.toppings.contains(&topping),
        }
    }

    /// 25 points per filled field: 0, 25, 50, 75 or 100.
    pub fn completion_score(&self) -> u8 {
        [
            self.base.is_some(),
            !self.mixins.is_empty(),
            self.drizzle.is_some(),
            !self.toppings.is_empty(),
        ]
        .into_iter()
        .filter(|filled| *filled)
        .map(|_| FIELD_WEIGHT)
        .sum()
    }
}

fn toggle<T: PartialEq>(items: &mut Vec<T>, item: T) {
    if let Some(pos) = items.iter().position(|existing| *existing == item) {
        items.remove(pos);
    } else {
        items.push(item);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DessertBuilder {
    step: WizardStep,
    selection: DessertSelection,
}

impl DessertBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn selection(&self) -> &DessertSelection {
        &self.selection
    }

    /// Set the base or drizzle, replacing any previous pick.
    pub fn select_single(&mut self, choice: SingleChoice) {
        match choice {
            SingleChoice::Base(base) => self.selection.base = Some(base),
            SingleChoice::Drizzle(drizzle) => self.selection.drizzle = Some(drizzle),
        }
    }

    /// Add a mix-in or topping, or remove it if already present. Remaining
    /// entries keep their order.
    pub fn toggle_multi(&mut self, choice: MultiChoice) {
        match choice {
            MultiChoice::MixIn(mixin) => toggle(&mut self.selection.mixins, mixin),
            MultiChoice::Topping(topping) => toggle(&mut self.selection.toppings, topping),
        }
    }

    /// Apply an option-grid click.
    pub fn choose(&mut self, choice: Choice) {
        match choice {
            Choice::Base(base) => self.select_single(SingleChoice::Base(base)),
            Choice::Drizzle(drizzle) => self.select_single(SingleChoice::Drizzle(drizzle)),
            Choice::MixIn(mixin) => self.toggle_multi(MultiChoice::MixIn(mixin)),
            Choice::Topping(topping) => self.toggle_multi(MultiChoice::Topping(topping)),
        }
    }

    /// Jump to step `index` (0..=3). Returns `false` and leaves the step
    /// unchanged for anything else.
    pub fn go_to_step(&mut self, index: usize) -> bool {
        match WizardStep::from_index(index) {
            Some(step) => {
                self.step = step;
                true
            }
            None => false,
        }
    }

    /// Next step. On the last step this is the inert "review" action.
    pub fn advance(&mut self) -> bool {
        self.go_to_step(self.step.index() + 1)
    }

    /// Previous step; no-op on the first.
    pub fn retreat(&mut self) -> bool {
        match self.step.index().checked_sub(1) {
            Some(index) => self.go_to_step(index),
            None => false,
        }
    }

    pub fn completion_score(&self) -> u8 {
        self.selection.completion_score()
    }

    /// Shareable combo text: `"{prefix} {base} with {mix-ins}"`.
    ///
    /// Missing parts render as empty strings, so an empty selection still
    /// yields `"{prefix}  with "`.
    pub fn share_text(&self, prefix: &str) -> String {
        let base = self.selection.base.map(Base::label).unwrap_or_default();
        let mixins = self
            .selection
            .mixins
            .iter()
            .map(|mixin| mixin.label())
            .collect::<Vec<_>>()
            .join(", ");
        format!("{prefix} {base} with {mixins}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PREFIX: &str = "My Spoonz creation: ";

    #[test]
    fn fresh_builder_starts_empty_on_first_step() {
        let builder = DessertBuilder::new();
        assert_eq!(builder.step(), WizardStep::Base);
        assert_eq!(builder.completion_score(), 0);
        assert_eq!(builder.selection(), &DessertSelection::default());
    }

    #[test]
    fn score_follows_base_and_mixin_toggles() {
        let mut builder = DessertBuilder::new();
        builder.select_single(SingleChoice::Base(Base::Vanilla));
        assert_eq!(builder.completion_score(), 25);
        builder.toggle_multi(MultiChoice::MixIn(MixIn::Oreo));
        assert_eq!(builder.completion_score(), 50);
        builder.toggle_multi(MultiChoice::MixIn(MixIn::Oreo));
        assert_eq!(builder.completion_score(), 25);
        assert!(builder.selection().mixins.is_empty());
    }

    #[test]
    fn score_is_monotone_while_filling_and_full_only_when_complete() {
        let mut builder = DessertBuilder::new();
        let steps = [
            Choice::Drizzle(Drizzle::Caramel),
            Choice::Topping(Topping::Sprinkles),
            Choice::Base(Base::Matcha),
            Choice::MixIn(MixIn::PbCups),
        ];
        let mut last = builder.completion_score();
        for (i, choice) in steps.into_iter().enumerate() {
            builder.choose(choice);
            let score = builder.completion_score();
            assert!(score >= last);
            assert_eq!(score == 100, i == steps.len() - 1);
            last = score;
        }
        assert_eq!(last, 100);
    }

    #[test]
    fn single_choice_replaces_previous_pick() {
        let mut builder = DessertBuilder::new();
        builder.choose(Choice::Base(Base::Vanilla));
        builder.choose(Choice::Base(Base::Chocolate));
        assert_eq!(builder.selection().base, Some(Base::Chocolate));
        builder.choose(Choice::Base(Base::Chocolate));
        assert_eq!(builder.selection().base, Some(Base::Chocolate));
    }

    #[test]
    fn toggling_twice_restores_membership() {
        for mixin in MixIn::ALL {
            let mut builder = DessertBuilder::new();
            builder.toggle_multi(MultiChoice::MixIn(MixIn::Brownie));
            let before = builder.selection().clone();
            builder.toggle_multi(MultiChoice::MixIn(mixin));
            builder.toggle_multi(MultiChoice::MixIn(mixin));
            assert_eq!(builder.selection(), &before);
        }
    }

    #[test]
    fn removal_preserves_insertion_order() {
        let mut builder = DessertBuilder::new();
        for topping in [Topping::Cherries, Topping::Sprinkles, Topping::WhippedCream] {
            builder.toggle_multi(MultiChoice::Topping(topping));
        }
        builder.toggle_multi(MultiChoice::Topping(Topping::Sprinkles));
        assert_eq!(
            builder.selection().toppings,
            vec![Topping::Cherries, Topping::WhippedCream]
        );
    }

    #[test]
    fn go_to_step_accepts_only_known_steps() {
        let mut builder = DessertBuilder::new();
        for index in 0..4 {
            assert!(builder.go_to_step(index));
            assert_eq!(builder.step().index(), index);
        }
        assert!(!builder.go_to_step(4));
        assert!(!builder.go_to_step(usize::MAX));
        assert_eq!(builder.step(), WizardStep::Toppings);
    }

    #[test]
    fn advance_stops_at_last_step() {
        let mut builder = DessertBuilder::new();
        for _ in 0..4 {
            builder.advance();
        }
        assert_eq!(builder.step(), WizardStep::Toppings);
        assert!(!builder.advance());
    }

    #[test]
    fn retreat_stops_at_first_step() {
        let mut builder = DessertBuilder::new();
        assert!(!builder.retreat());
        builder.go_to_step(2);
        assert!(builder.retreat());
        assert_eq!(builder.step(), WizardStep::Mixins);
    }

    #[test]
    fn navigation_leaves_selection_alone() {
        let mut builder = DessertBuilder::new();
        builder.choose(Choice::Base(Base::Strawberry));
        builder.choose(Choice::Topping(Topping::Cherries));
        let before = builder.selection().clone();
        builder.advance();
        builder.go_to_step(3);
        builder.retreat();
        assert_eq!(builder.selection(), &before);
    }

    #[test]
    fn share_text_lists_base_and_mixins() {
        let mut builder = DessertBuilder::new();
        builder.choose(Choice::Base(Base::Chocolate));
        builder.choose(Choice::MixIn(MixIn::Oreo));
        builder.choose(Choice::MixIn(MixIn::Brownie));
        assert_eq!(
            builder.share_text(PREFIX),
            format!("{PREFIX} Chocolate with Oreo, Brownie")
        );
    }

    #[test]
    fn share_text_keeps_empty_segments() {
        let builder = DessertBuilder::new();
        assert_eq!(builder.share_text(PREFIX), "My Spoonz creation:   with ");

        let mut builder = DessertBuilder::new();
        builder.choose(Choice::Base(Base::Vanilla));
        assert_eq!(builder.share_text(PREFIX), "My Spoonz creation:  Vanilla with ");
    }
}
