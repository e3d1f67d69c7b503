//! Convenience macros for extension development.

/// Macro for declaratively building a [`Contribution`].
///
/// Optional arms (`description`, `priority`, `deployments`, `roles`) may be
/// given in any combination after the required three, in this order.
///
/// # Example
/// ```rust,ignore
/// let c = contribution!(
///     id: "webhooks",
///     name: "Webhooks",
///     value: HookValue::Settings(panel),
///     description: "Deliver workspace events over HTTP",
///     priority: 10,
/// );
/// ```
///
/// [`Contribution`]: notehub_extension::contribution::Contribution
#[macro_export]
macro_rules! contribution {
    (
        id: $id:expr,
        name: $name:expr,
        value: $value:expr
        $(, description: $desc:expr)?
        $(, priority: $priority:expr)?
        $(, deployments: [$($deployment:expr),* $(,)?])?
        $(, roles: [$($role:expr),* $(,)?])?
        $(,)?
    ) => {{
        #[allow(unused_mut)]
        let mut c = $crate::prelude::Contribution::new($id, $name, $value);
        $( c = c.with_description($desc); )?
        $( c = c.with_priority($priority); )?
        $( c = c.with_deployments([$($deployment),*]); )?
        $( c = c.with_roles([$($role),*]); )?
        c
    }};
}
