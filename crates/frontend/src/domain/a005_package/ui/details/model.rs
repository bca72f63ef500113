use crate::domain::a005_package::ui::list::PACKAGES_ENDPOINT;
use crate::shared::api::ApiClient;
use crate::shared::list_page::record_path;
use contracts::domain::a005_package::PackageDto;
use contracts::domain::common::RecordId;

/// Create a package, or update it when `id` is set
pub async fn save_package(
    api: &ApiClient,
    id: Option<&RecordId>,
    dto: &PackageDto,
) -> Result<(), String> {
    match id {
        Some(id) => api.put_json(&record_path(PACKAGES_ENDPOINT, id), dto).await?,
        None => api.post_json(PACKAGES_ENDPOINT, dto).await?,
    };
    Ok(())
}
