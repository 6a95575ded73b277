//! Resource model to API request conversion

use crate::model::ResourceModel;
use opsworkscm_api::{CreateServerInput, UpdateServerInput};

/// CreateServer request for the full model. Absent collections become empty.
pub fn create_server_input(model: &ResourceModel) -> CreateServerInput {
    CreateServerInput {
        server_name: model.server_name().to_string(),
        engine: model.engine.clone(),
        engine_model: model.engine_model.clone(),
        engine_version: model.engine_version.clone(),
        engine_attributes: model.engine_attributes.clone().unwrap_or_default(),
        instance_profile_arn: model.instance_profile_arn.clone(),
        instance_type: model.instance_type.clone(),
        key_pair: model.key_pair.clone(),
        service_role_arn: model.service_role_arn.clone(),
        subnet_ids: model.subnet_ids.clone().unwrap_or_default(),
        security_group_ids: model.security_group_ids.clone().unwrap_or_default(),
        backup_id: model.backup_id.clone(),
        backup_retention_count: model.backup_retention_count,
        disable_automated_backup: model.disable_automated_backup,
        associate_public_ip_address: model.associate_public_ip_address,
        custom_domain: model.custom_domain.clone(),
        custom_certificate: model.custom_certificate.clone(),
        custom_private_key: model.custom_private_key.clone(),
        preferred_backup_window: model.preferred_backup_window.clone(),
        preferred_maintenance_window: model.preferred_maintenance_window.clone(),
        tags: model.tags.clone().unwrap_or_default(),
    }
}

/// UpdateServer request carrying only the mutable settings
pub fn update_server_input(model: &ResourceModel) -> UpdateServerInput {
    UpdateServerInput {
        server_name: model.server_name().to_string(),
        disable_automated_backup: model.disable_automated_backup,
        backup_retention_count: model.backup_retention_count,
        preferred_backup_window: model.preferred_backup_window.clone(),
        preferred_maintenance_window: model.preferred_maintenance_window.clone(),
    }
}
