use crate::modules::activities::application::errors::ApplicationError;
use crate::modules::activities::core::activity::Activity;
use crate::modules::activities::core::decision::Decision;
use crate::shared::infrastructure::activity_registry::ActivityRegistry;

/// Run `decide` against the named activity and keep the accepted state.
///
/// The registry applies the decision under its write lock, so two requests against the same
/// activity always see each other's result: a second signup for the same email is rejected as a
/// duplicate and never overwrites a concurrent signup for another email.
pub async fn apply_decision<TRegistry, TDecide>(
    registry: &TRegistry,
    activity_name: &str,
    decide: TDecide,
) -> Result<Activity, ApplicationError>
where
    TRegistry: ActivityRegistry + ?Sized,
    TDecide: Fn(&Activity) -> Decision + Send + Sync,
{
    match registry.update(activity_name, &decide).await? {
        None => Err(ApplicationError::activity_not_found()),
        Some(Decision::Accepted { activity }) => Ok(activity),
        Some(Decision::Rejected { reason }) => Err(reason.into()),
    }
}
