use std::sync::Arc;

use wo_service::WorkOrderService;

#[derive(Clone)]
pub struct AppState {
	pub service: Arc<WorkOrderService>,
}
impl AppState {
	pub fn new(config: wo_config::Config) -> color_eyre::Result<Self> {
		let service = WorkOrderService::new(config)?;

		Ok(Self::from_service(service))
	}

	pub fn from_service(service: WorkOrderService) -> Self {
		Self { service: Arc::new(service) }
	}
}
