use std::sync::Arc;

use deepface::client::DeepFaceClient;
use deepface::face_verifier::FaceVerifierDeepFace;
use fetcher::image_fetcher::ImageFetcherHttp;
use logger::TracingLogger;
use storage::transient_image::store::TempFileImageStore;

use business::application::face_match::compare_faces::CompareFacesUseCaseImpl;
use business::application::face_match::scan_candidates::ScanCandidatesUseCaseImpl;

use crate::config::face_verifier_config::FaceVerifierConfig;
use crate::config::image_fetcher_config::init_image_fetcher_config;
use crate::config::scan_config::ScanConfig;
use crate::config::storage_config::init_storage_dir;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub face_match_api: crate::api::face_match::routes::FaceMatchApi,
}

impl DependencyContainer {
    pub fn new() -> anyhow::Result<Self> {
        let logger = Arc::new(TracingLogger);
        let health_api = crate::api::health::routes::Api::new();

        // Infrastructure adapters
        let store = Arc::new(TempFileImageStore::new(init_storage_dir()?));
        let fetcher = Arc::new(ImageFetcherHttp::new(init_image_fetcher_config()));

        let verifier_config = FaceVerifierConfig::from_env();
        let verifier = Arc::new(FaceVerifierDeepFace::new(DeepFaceClient::new(
            verifier_config.base_url,
            verifier_config.timeout,
        )));

        // Face match use cases
        let scan_use_case = Arc::new(ScanCandidatesUseCaseImpl {
            fetcher,
            verifier,
            store: store.clone(),
            logger: logger.clone(),
        });
        let compare_use_case = Arc::new(CompareFacesUseCaseImpl {
            scanner: scan_use_case,
            store,
            logger,
            scan_timeout: ScanConfig::from_env().timeout,
        });

        let face_match_api = crate::api::face_match::routes::FaceMatchApi::new(compare_use_case);

        Ok(Self {
            health_api,
            face_match_api,
        })
    }
}
