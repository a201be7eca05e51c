use std::path::Path;

use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::Deserialize;
use serde_json::json;

use business::domain::face_match::errors::VerificationError;
use business::domain::face_match::model::Verification;
use business::domain::face_match::services::FaceVerifierService;

use crate::client::DeepFaceClient;

const MODEL_NAME: &str = "Facenet";
const DETECTOR_BACKEND: &str = "opencv";
const DISTANCE_METRIC: &str = "cosine";

#[derive(Deserialize)]
struct VerifyResponse {
    verified: bool,
    distance: Option<f64>,
    threshold: Option<f64>,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

pub struct FaceVerifierDeepFace {
    client: DeepFaceClient,
}

impl FaceVerifierDeepFace {
    pub fn new(client: DeepFaceClient) -> Self {
        Self { client }
    }

    fn to_data_url(bytes: &[u8]) -> String {
        let mime = image::guess_format(bytes)
            .map(|format| format.to_mime_type())
            .unwrap_or("image/jpeg");
        format!("data:{};base64,{}", mime, STANDARD.encode(bytes))
    }

    async fn read_data_url(path: &Path) -> Result<String, VerificationError> {
        let bytes = tokio::fs::read(path).await.map_err(|e| {
            VerificationError::UnreadableImage(format!("{}: {}", path.display(), e))
        })?;
        Ok(Self::to_data_url(&bytes))
    }

    fn parse_verify_response(body: &str) -> Result<Verification, VerificationError> {
        let parsed: VerifyResponse =
            serde_json::from_str(body).map_err(|_| VerificationError::InvalidResponse)?;

        Ok(Verification {
            verified: parsed.verified,
            distance: parsed.distance,
            threshold: parsed.threshold,
        })
    }

    /// DeepFace answers 400 with `{"error": ...}` when it cannot process an
    /// image (for example no face detected).
    fn parse_error(status: u16, body: &str) -> VerificationError {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.error)
            .unwrap_or_else(|| format!("status {}", status));

        if (400..500).contains(&status) {
            VerificationError::Rejected(message)
        } else {
            VerificationError::Request(message)
        }
    }
}

#[async_trait]
impl FaceVerifierService for FaceVerifierDeepFace {
    async fn verify(
        &self,
        captured: &Path,
        candidate: &Path,
    ) -> Result<Verification, VerificationError> {
        let img1 = Self::read_data_url(captured).await?;
        let img2 = Self::read_data_url(candidate).await?;

        let body = json!({
            "img1": img1,
            "img2": img2,
            "model_name": MODEL_NAME,
            "detector_backend": DETECTOR_BACKEND,
            "distance_metric": DISTANCE_METRIC,
        });

        let response = self
            .client
            .client
            .post(self.client.verify_url())
            .json(&body)
            .send()
            .await
            .map_err(|e| VerificationError::Request(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| VerificationError::Request(e.to_string()))?;

        if !status.is_success() {
            return Err(Self::parse_error(status.as_u16(), &text));
        }

        Self::parse_verify_response(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::sync::oneshot;

    const JPEG_BYTES: &[u8] = &[0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10];

    /// Serves one canned reply and hands back everything the client sent.
    async fn serve_once(reply: String) -> (String, oneshot::Receiver<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (tx, rx) = oneshot::channel();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut received = Vec::new();
            let mut buf = [0u8; 8192];
            loop {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                received.extend_from_slice(&buf[..n]);
                let text = String::from_utf8_lossy(&received);
                if let Some((head, body)) = text.split_once("\r\n\r\n") {
                    let expected = head
                        .lines()
                        .find_map(|l| {
                            l.to_ascii_lowercase()
                                .strip_prefix("content-length:")
                                .map(|v| v.trim().parse::<usize>().unwrap_or(0))
                        })
                        .unwrap_or(0);
                    if body.len() >= expected {
                        break;
                    }
                }
            }
            let _ = socket.write_all(reply.as_bytes()).await;
            let _ = socket.shutdown().await;
            let _ = tx.send(String::from_utf8_lossy(&received).into_owned());
        });

        (format!("http://{}", addr), rx)
    }

    fn json_reply(status: &str, body: &str) -> String {
        format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        )
    }

    fn write_image(dir: &tempfile::TempDir, name: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, JPEG_BYTES).unwrap();
        path
    }

    #[test]
    fn should_parse_verified_response_with_scores() {
        let body = r#"{"verified":true,"distance":0.23,"threshold":0.4,"model":"Facenet","time":1.2}"#;

        let verification = FaceVerifierDeepFace::parse_verify_response(body).unwrap();

        assert!(verification.verified);
        assert_eq!(verification.distance, Some(0.23));
        assert_eq!(verification.threshold, Some(0.4));
    }

    #[test]
    fn should_reject_response_without_verdict() {
        let result = FaceVerifierDeepFace::parse_verify_response(r#"{"distance":0.3}"#);

        assert!(matches!(result, Err(VerificationError::InvalidResponse)));
    }

    #[test]
    fn should_map_client_error_to_rejection_with_message() {
        let err = FaceVerifierDeepFace::parse_error(
            400,
            r#"{"error":"Face could not be detected in numpy array."}"#,
        );

        match err {
            VerificationError::Rejected(message) => assert!(message.contains("Face could not")),
            other => panic!("expected Rejected, got {:?}", other),
        }
    }

    #[test]
    fn should_map_server_error_without_body_to_request_failure() {
        let err = FaceVerifierDeepFace::parse_error(502, "<html>bad gateway</html>");

        assert!(matches!(err, VerificationError::Request(m) if m == "status 502"));
    }

    #[test]
    fn should_encode_jpeg_as_data_url() {
        let url = FaceVerifierDeepFace::to_data_url(JPEG_BYTES);

        assert!(url.starts_with("data:image/jpeg;base64,"));
    }

    #[tokio::test]
    async fn should_send_both_images_with_fixed_model_settings() {
        let (base_url, received) = serve_once(json_reply(
            "200 OK",
            r#"{"verified":true,"distance":0.12,"threshold":0.4}"#,
        ))
        .await;
        let dir = tempfile::tempdir().unwrap();
        let captured = write_image(&dir, "temp_captured_a.jpg");
        let candidate = write_image(&dir, "temp_url_b.jpg");
        let verifier =
            FaceVerifierDeepFace::new(DeepFaceClient::new(base_url, Duration::from_secs(5)));

        let verification = verifier.verify(&captured, &candidate).await.unwrap();

        assert!(verification.verified);
        assert_eq!(verification.distance, Some(0.12));
        let request = received.await.unwrap();
        assert!(request.starts_with("POST /verify"));
        assert!(request.contains(r#""model_name":"Facenet""#));
        assert!(request.contains(r#""detector_backend":"opencv""#));
        assert!(request.contains(r#""distance_metric":"cosine""#));
        assert!(request.contains("data:image/jpeg;base64,"));
    }

    #[tokio::test]
    async fn should_report_rejection_from_backend() {
        let (base_url, _received) = serve_once(json_reply(
            "400 Bad Request",
            r#"{"error":"Face could not be detected"}"#,
        ))
        .await;
        let dir = tempfile::tempdir().unwrap();
        let captured = write_image(&dir, "a.jpg");
        let candidate = write_image(&dir, "b.jpg");
        let verifier =
            FaceVerifierDeepFace::new(DeepFaceClient::new(base_url, Duration::from_secs(5)));

        let result = verifier.verify(&captured, &candidate).await;

        assert!(matches!(result, Err(VerificationError::Rejected(_))));
    }

    #[tokio::test]
    async fn should_fail_before_calling_backend_when_image_is_missing() {
        let dir = tempfile::tempdir().unwrap();
        let captured = write_image(&dir, "a.jpg");
        let verifier = FaceVerifierDeepFace::new(DeepFaceClient::new(
            "http://127.0.0.1:9".to_string(),
            Duration::from_secs(1),
        ));

        let result = verifier
            .verify(&captured, &dir.path().join("missing.jpg"))
            .await;

        assert!(matches!(result, Err(VerificationError::UnreadableImage(_))));
    }
}
