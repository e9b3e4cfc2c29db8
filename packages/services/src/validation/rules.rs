use chrono::NaiveDate;
use models::form_state::{FieldValue, FormField, FormState};
use models::kinds::FormKind;

/// Inputs a rule may need besides the form itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleContext {
    pub today: NaiveDate,
}

pub type RuleResult = Result<(), &'static str>;

/// A pure check of one field against the whole form.
///
/// Rules only see non-blank values; required-ness is applied by
/// [`FormSchema::check`] from the field's declared [`Requirement`].
///
/// [`Requirement`]: models::form_state::Requirement
pub type ValidationRule<F> = fn(&FieldValue, &FormState<F>, &RuleContext) -> RuleResult;

/// Rule for fields whose only constraint is their requirement.
pub fn any_value<F: FormField>(_: &FieldValue, _: &FormState<F>, _: &RuleContext) -> RuleResult {
    Ok(())
}

/// The rule table of one form.
pub trait FormSchema: Send + Sync + 'static {
    type Field: FormField;

    const KIND: FormKind;

    fn rule(field: Self::Field) -> ValidationRule<Self::Field>;

    fn required_message(_field: Self::Field) -> &'static str {
        "Required"
    }

    /// Field driving the strength meter, if the form shows one.
    fn strength_field() -> Option<Self::Field> {
        None
    }

    /// Shown once the simulated call succeeds.
    fn success_message() -> &'static str;

    fn check(
        field: Self::Field,
        state: &FormState<Self::Field>,
        context: &RuleContext,
    ) -> Option<&'static str> {
        let value = state.get(field);
        if value.is_blank() {
            return field.is_required().then(|| Self::required_message(field));
        }
        Self::rule(field)(value, state, context).err()
    }
}
