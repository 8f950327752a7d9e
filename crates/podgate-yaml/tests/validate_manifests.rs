//! End-to-end validation over YAML manifests
//!
//! Parses real manifest text and asserts the exact diagnostic strings the
//! gate produces, line numbers included.

use podgate_core::validate;
use podgate_yaml::parse_document;

/// Parse and validate under the source label `pod.yaml`.
fn check(yaml: &str) -> Vec<String> {
    let root = parse_document(yaml).expect("manifest should parse");
    validate("pod.yaml", root.as_ref())
        .iter()
        .map(|d| d.to_string())
        .collect()
}

const VALID_POD: &str = "\
apiVersion: v1
kind: Pod
metadata:
  name: web
spec:
  containers:
    - name: web
      image: registry.bigbrother.io/web:1.0
      resources: {}
";

#[test]
fn test_minimal_valid_pod() {
    assert_eq!(check(VALID_POD), Vec::<String>::new());
}

#[test]
fn test_fully_featured_valid_pod() {
    let yaml = "\
apiVersion: v1
kind: Pod
metadata:
  name: web
  namespace: prod
spec:
  os: linux
  containers:
    - name: web_1
      image: registry.bigbrother.io/web:2.3
      ports:
        - containerPort: 8080
          protocol: TCP
        - containerPort: 8443
      readinessProbe:
        httpGet:
          path: /ready
          port: 8080
      livenessProbe:
        httpGet:
          path: /live
          port: 8080
      resources:
        limits:
          cpu: \"2\"
          memory: 512Mi
        requests:
          cpu: \"1\"
          memory: 256Mi
";
    assert_eq!(check(yaml), Vec::<String>::new());
}

#[test]
fn test_missing_api_version() {
    let yaml = "\
kind: Pod
metadata:
  name: web
spec:
  containers: []
";
    assert_eq!(check(yaml), vec!["apiVersion is required"]);
}

#[test]
fn test_unsupported_kind_with_line() {
    let yaml = "\
apiVersion: v1
kind: Service
metadata:
  name: web
spec:
  containers: []
";
    assert_eq!(
        check(yaml),
        vec!["pod.yaml:2 kind has unsupported value 'Service'"]
    );
}

#[test]
fn test_missing_metadata_and_spec() {
    let yaml = "\
apiVersion: v1
kind: Pod
";
    assert_eq!(
        check(yaml),
        vec!["metadata is required", "spec is required"]
    );
}

#[test]
fn test_containers_as_mapping_yields_one_diagnostic() {
    let yaml = "\
apiVersion: v1
kind: Pod
metadata:
  name: web
spec:
  containers:
    name: web
    image: nginx
";
    assert_eq!(check(yaml), vec!["pod.yaml:7 spec.containers must be a list"]);
}

#[test]
fn test_container_name_format() {
    let yaml = "\
apiVersion: v1
kind: Pod
metadata:
  name: web
spec:
  containers:
    - name: My-App
      image: registry.bigbrother.io/web:1.0
      resources: {}
";
    assert_eq!(
        check(yaml),
        vec!["pod.yaml:7 containers.name has invalid format 'My-App'"]
    );
}

#[test]
fn test_image_checks_are_independent() {
    let yaml = "\
apiVersion: v1
kind: Pod
metadata:
  name: web
spec:
  containers:
    - name: web
      image: nginx:1.0
      resources: {}
    - name: app
      image: registry.bigbrother.io/app
      resources: {}
";
    assert_eq!(
        check(yaml),
        vec![
            "pod.yaml:8 containers.image has unsupported value 'nginx:1.0'",
            "pod.yaml:11 containers.image must include tag",
        ]
    );
}

#[test]
fn test_container_port_range() {
    let yaml = "\
apiVersion: v1
kind: Pod
metadata:
  name: web
spec:
  containers:
    - name: web
      image: registry.bigbrother.io/web:1.0
      ports:
        - containerPort: 70000
        - containerPort: 0
        - containerPort: 8080
      resources: {}
";
    assert_eq!(
        check(yaml),
        vec![
            "pod.yaml:10 containerPort value out of range",
            "pod.yaml:11 containerPort value out of range",
        ]
    );
}

#[test]
fn test_missing_container_port_uses_entry_line() {
    let yaml = "\
apiVersion: v1
kind: Pod
metadata:
  name: web
spec:
  containers:
    - name: web
      image: registry.bigbrother.io/web:1.0
      ports:
        - protocol: TCP
      resources: {}
";
    assert_eq!(check(yaml), vec!["pod.yaml:10 containerPort is required"]);
}

#[test]
fn test_probe_without_http_get() {
    let yaml = "\
apiVersion: v1
kind: Pod
metadata:
  name: web
spec:
  containers:
    - name: web
      image: registry.bigbrother.io/web:1.0
      readinessProbe:
        initialDelaySeconds: 5
      resources: {}
";
    assert_eq!(
        check(yaml),
        vec!["pod.yaml:10 readinessProbe.httpGet is required"]
    );
}

#[test]
fn test_probe_path_and_port() {
    let yaml = "\
apiVersion: v1
kind: Pod
metadata:
  name: web
spec:
  containers:
    - name: web
      image: registry.bigbrother.io/web:1.0
      livenessProbe:
        httpGet:
          path: healthz
          port: http
      resources: {}
";
    assert_eq!(
        check(yaml),
        vec![
            "pod.yaml:11 livenessProbe.httpGet.path has invalid format 'healthz'",
            "pod.yaml:12 livenessProbe.httpGet.port must be int",
        ]
    );
}

#[test]
fn test_resource_quantities() {
    let yaml = "\
apiVersion: v1
kind: Pod
metadata:
  name: web
spec:
  containers:
    - name: web
      image: registry.bigbrother.io/web:1.0
      resources:
        limits:
          cpu: 500m
          memory: 512MB
        requests:
          cpu: \"2\"
          memory: 0.5Gi
";
    assert_eq!(
        check(yaml),
        vec![
            "pod.yaml:11 limits.cpu must be int",
            "pod.yaml:12 limits.memory has invalid format '512MB'",
            "pod.yaml:15 requests.memory has invalid format '0.5Gi'",
        ]
    );
}

#[test]
fn test_missing_resources() {
    let yaml = "\
apiVersion: v1
kind: Pod
metadata:
  name: web
spec:
  containers:
    - name: web
      image: registry.bigbrother.io/web:1.0
";
    assert_eq!(check(yaml), vec!["containers.resources is required"]);
}

#[test]
fn test_blank_input_reports_empty_document() {
    let root = parse_document("# nothing here\n").unwrap();
    let diagnostics = validate("pod.yaml", root.as_ref());
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].to_string(), "pod.yaml: empty document");
}

#[test]
fn test_validation_is_deterministic() {
    let yaml = "\
apiVersion: v2
kind: Service
metadata: {}
spec:
  containers:
    - name: Bad-Name
      image: nginx
      resources:
        limits:
          memory: lots
          cpu: some
";
    let root = parse_document(yaml).unwrap();
    let first: Vec<String> = validate("pod.yaml", root.as_ref())
        .iter()
        .map(|d| d.to_string())
        .collect();
    let second: Vec<String> = validate("pod.yaml", root.as_ref())
        .iter()
        .map(|d| d.to_string())
        .collect();

    assert!(!first.is_empty());
    assert_eq!(first, second);
}
