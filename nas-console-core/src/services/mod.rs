//! 业务逻辑服务层

mod entity_service;

pub use entity_service::EntityService;
