use crate::dto::HealthRes;

/// Health check behind `GET /health`.
#[derive(Clone, Default)]
pub struct HealthService;

impl HealthService {
    /// Reports the service as healthy.
    ///
    /// The notes service holds no local state, so being able to answer at all is the check.
    pub fn check_health() -> HealthRes {
        HealthRes {
            ok: true,
            message: "Notes service is alive".into(),
        }
    }
}
