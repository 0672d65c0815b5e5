use approx::assert_abs_diff_eq;
use ndarray::array;
use rusvm_predict::{KernelMethod, SvmError, SvmModel};

const RBF_MODEL: &str = r#"{
    "vector_dimension": 2,
    "intercept": 0.0,
    "dual_coefficients": [0.5, -0.5],
    "support_vectors": [1.0, 1.0, -1.0, -1.0],
    "classes": [-1, 1],
    "kernel": { "kind": "rbf", "gamma": 0.5 }
}"#;

#[test]
fn predict_from_model_file() {
    let model = SvmModel::<f64>::from_reader(RBF_MODEL.as_bytes()).unwrap();
    assert_eq!(model.nb_of_support_vectors(), 2);
    assert!(matches!(model.kernel, KernelMethod::Rbf(k) if k.gamma == 0.5));

    let svm = model.instance().unwrap();
    let far = 0.5 * (-4.0f64).exp();
    assert_abs_diff_eq!(
        svm.decision_function(&[1.0, 1.0]),
        0.5 - far,
        epsilon = 1e-12
    );

    let samples = array![[1.0, 1.0], [-1.0, -1.0], [0.0, 0.0]];
    let labels = svm.predict_batch(samples.view()).unwrap();
    // both kernel values are equal at the origin
    assert_eq!(labels, array![1, -1, -1]);
}

#[test]
fn polynomial_defaults_in_model_file() {
    let json = r#"{
        "vector_dimension": 1,
        "intercept": -1.0,
        "dual_coefficients": [1.0],
        "support_vectors": [1.0],
        "classes": [0, 1],
        "kernel": { "kind": "polynomial", "coef0": 1.0 }
    }"#;
    let model = SvmModel::<f32>::from_json(json).unwrap();
    let svm = model.instance().unwrap();
    // (1 · 1 + 1)³ - 1
    assert_abs_diff_eq!(svm.decision_function(&[1.0]), 7.0);
    assert_eq!(svm.try_predict(&[-1.0]).unwrap(), 0);
}

#[test]
fn invalid_model_files() {
    let same_classes = RBF_MODEL.replace("[-1, 1]", "[1, 1]");
    assert!(matches!(
        SvmModel::<f64>::from_json(&same_classes),
        Err(SvmError::IdenticalClasses(1))
    ));

    let unknown_kernel = RBF_MODEL.replace("\"rbf\"", "\"laplace\"");
    assert!(matches!(
        SvmModel::<f64>::from_json(&unknown_kernel),
        Err(SvmError::Json(_))
    ));
}
