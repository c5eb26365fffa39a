use std::process::{Command, Output};

use serde_json::Value;

const MODELS_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../models");

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_anotador"))
        .args(["--models-dir", MODELS_DIR])
        .args(args)
        .output()
        .expect("falha ao executar o binário")
}

fn annotate(text: &str) -> Value {
    let output = run(&[text]);
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("saída deve ser JSON")
}

fn strings(value: &Value) -> Vec<&str> {
    value
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap())
        .collect()
}

#[test]
fn test_output_has_all_fields() {
    let json = annotate("Este producto es excelente y genial");
    for key in [
        "tokens",
        "entities",
        "pos_tags",
        "dependencies",
        "lemmas",
        "sentiment",
        "keywords",
    ] {
        assert!(json.get(key).is_some(), "campo ausente: {key}");
    }

    let tokens = json["tokens"].as_array().unwrap();
    assert_eq!(tokens.len(), 6);
    assert_eq!(tokens[1]["text"], "producto");
    assert_eq!(tokens[1]["pos"], "NOUN");
    assert_eq!(json["pos_tags"].as_array().unwrap().len(), 6);
    assert_eq!(json["lemmas"].as_array().unwrap().len(), 6);
    assert_eq!(json["lemmas"][2], "ser");
}

#[test]
fn test_sentiment_examples() {
    assert_eq!(annotate("Este producto es excelente y genial")["sentiment"], "positive");
    assert_eq!(annotate("Este servicio es terrible y horrible")["sentiment"], "negative");
    assert_eq!(annotate("El cielo está nublado hoy")["sentiment"], "neutral");
}

#[test]
fn test_dependencies_skip_the_root() {
    let json = annotate("El cielo está nublado hoy");
    let deps = json["dependencies"].as_array().unwrap();
    assert_eq!(deps.len(), json["tokens"].as_array().unwrap().len() - 1);
    assert!(deps.iter().all(|d| d["dep"] != "ROOT"));

    let cop = deps.iter().find(|d| d["text"] == "está").unwrap();
    assert_eq!(cop["dep"], "cop");
    assert_eq!(cop["head"], "nublado");
}

#[test]
fn test_keywords_are_content_lemmas() {
    let json = annotate("El cielo está nublado hoy");
    assert_eq!(strings(&json["keywords"]), ["cielo", "nublado"]);
    assert!(json["entities"].as_array().unwrap().is_empty());
}

#[test]
fn test_entities_with_char_offsets() {
    let json = annotate("María vive en Madrid con Juan.");
    let entities: Vec<(&str, &str)> = json["entities"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| (e["text"].as_str().unwrap(), e["label"].as_str().unwrap()))
        .collect();
    assert_eq!(entities, [("María", "PER"), ("Madrid", "LOC"), ("Juan", "PER")]);
    assert_eq!(json["entities"][0]["start"], 0);
    assert_eq!(json["entities"][0]["end"], 5);
    assert_eq!(json["entities"][1]["start"], 14);
}

#[test]
fn test_same_input_same_output() {
    let text = "El presidente Pedro Sánchez visitó Sevilla ayer.";
    let first = run(&[text]);
    let second = run(&[text]);
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn test_empty_text_is_neutral() {
    let json = annotate("");
    assert!(json["tokens"].as_array().unwrap().is_empty());
    assert!(json["keywords"].as_array().unwrap().is_empty());
    assert_eq!(json["sentiment"], "neutral");
}

#[test]
fn test_missing_argument_prints_usage() {
    let output = Command::new(env!("CARGO_BIN_EXE_anotador"))
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Usage"));
}

#[test]
fn test_extra_argument_prints_usage() {
    let output = run(&["uno", "dos"]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Usage"));
}

#[test]
fn test_option_like_text_after_double_dash() {
    let output = run(&["--", "--help"]);
    assert!(output.status.success());
    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    let tokens: Vec<&str> = json["tokens"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["text"].as_str().unwrap())
        .collect();
    assert_eq!(tokens, ["-", "-", "help"]);
}

#[test]
fn test_help_shows_double_dash_usage() {
    let output = run(&["--help"]);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("[--] <TEXT>"));
}

#[test]
fn test_missing_model_explains_installation() {
    let output = Command::new(env!("CARGO_BIN_EXE_anotador"))
        .args(["--models-dir", "/diretorio/inexistente", "Hola"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.starts_with("Error:"));
    assert!(stderr.contains("es_core_news_sm.json"));
    assert!(stderr.contains("--models-dir"));
}

#[cfg(not(feature = "spacy"))]
#[test]
fn test_spacy_backend_requires_feature() {
    let output = run(&["--backend", "spacy", "Hola"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("--features spacy"));
}
