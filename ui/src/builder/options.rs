//! Fixed option lists offered at each configurator step.
//!
//! Labels are product names and are shown untranslated in every language.

use super::engine::WizardStep;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Base {
    Vanilla,
    Chocolate,
    Strawberry,
    Matcha,
}

impl Base {
    pub const ALL: [Base; 4] = [Base::Vanilla, Base::Chocolate, Base::Strawberry, Base::Matcha];

    pub fn label(self) -> &'static str {
        match self {
            Base::Vanilla => "Vanilla",
            Base::Chocolate => "Chocolate",
            Base::Strawberry => "Strawberry",
            Base::Matcha => "Matcha (Seasonal)",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MixIn {
    Oreo,
    Cheesecake,
    Strawberry,
    Brownie,
    CookieDough,
    Pecans,
    PbCups,
}

impl MixIn {
    pub const ALL: [MixIn; 7] = [
        MixIn::Oreo,
        MixIn::Cheesecake,
        MixIn::Strawberry,
        MixIn::Brownie,
        MixIn::CookieDough,
        MixIn::Pecans,
        MixIn::PbCups,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MixIn::Oreo => "Oreo",
            MixIn::Cheesecake => "Cheesecake",
            MixIn::Strawberry => "Strawberry",
            MixIn::Brownie => "Brownie",
            MixIn::CookieDough => "Cookie Dough",
            MixIn::Pecans => "Pecans",
            MixIn::PbCups => "PB Cups",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Drizzle {
    HotFudge,
    Caramel,
    StrawberrySauce,
    CondensedMilk,
}

impl Drizzle {
    pub const ALL: [Drizzle; 4] = [
        Drizzle::HotFudge,
        Drizzle::Caramel,
        Drizzle::StrawberrySauce,
        Drizzle::CondensedMilk,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Drizzle::HotFudge => "Hot Fudge",
            Drizzle::Caramel => "Caramel",
            Drizzle::StrawberrySauce => "Strawberry Sauce",
            Drizzle::CondensedMilk => "Condensed Milk",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topping {
    WhippedCream,
    Sprinkles,
    ExtraFruit,
    Marshmallows,
    Cherries,
}

impl Topping {
    pub const ALL: [Topping; 5] = [
        Topping::WhippedCream,
        Topping::Sprinkles,
        Topping::ExtraFruit,
        Topping::Marshmallows,
        Topping::Cherries,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Topping::WhippedCream => "Whipped Cream",
            Topping::Sprinkles => "Sprinkles",
            Topping::ExtraFruit => "Extra Fruit",
            Topping::Marshmallows => "Marshmallows",
            Topping::Cherries => "Cherries",
        }
    }
}

/// Choice for a step that holds at most one option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SingleChoice {
    Base(Base),
    Drizzle(Drizzle),
}

/// Choice for a step that holds a set of options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MultiChoice {
    MixIn(MixIn),
    Topping(Topping),
}

/// Any option from any step, as rendered in the option grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Base(Base),
    MixIn(MixIn),
    Drizzle(Drizzle),
    Topping(Topping),
}

impl Choice {
    /// Options offered at `step`, in display order.
    pub fn for_step(step: WizardStep) -> Vec<Choice> {
        match step {
            WizardStep::Base => Base::ALL.into_iter().map(Choice::Base).collect(),
            WizardStep::Mixins => MixIn::ALL.into_iter().map(Choice::MixIn).collect(),
            WizardStep::Drizzle => Drizzle::ALL.into_iter().map(Choice::Drizzle).collect(),
            WizardStep::Toppings => Topping::ALL.into_iter().map(Choice::Topping).collect(),
        }
    }

    pub fn step(self) -> WizardStep {
        match self {
            Choice::Base(_) => WizardStep::Base,
            Choice::MixIn(_) => WizardStep::Mixins,
            Choice::Drizzle(_) => WizardStep::Drizzle,
            Choice::Topping(_) => WizardStep::Toppings,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Choice::Base(base) => base.label(),
            Choice::MixIn(mixin) => mixin.label(),
            Choice::Drizzle(drizzle) => drizzle.label(),
            Choice::Topping(topping) => topping.label(),
        }
    }
}
