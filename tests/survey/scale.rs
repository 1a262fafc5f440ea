use likert::survey::{Scale, ScaleError, ScalePreset, Score, ScoreBand};

fn labels(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("label {}", i)).collect()
}

#[test]
fn test_eleven_point_bands() {
    let scale = Scale::eleven_point();
    for value in 0..=6 {
        assert_eq!(scale.classify(Score::new(value)), ScoreBand::Detractor, "score {}", value);
    }
    assert_eq!(scale.classify(Score::new(7)), ScoreBand::Passive);
    assert_eq!(scale.classify(Score::new(8)), ScoreBand::Passive);
    assert_eq!(scale.classify(Score::new(9)), ScoreBand::Promoter);
    assert_eq!(scale.classify(Score::new(10)), ScoreBand::Promoter);
}

#[test]
fn test_five_point_bands() {
    let scale = Scale::five_point();
    assert_eq!(scale.classify(Score::new(1)), ScoreBand::Detractor);
    assert_eq!(scale.classify(Score::new(2)), ScoreBand::Detractor);
    assert_eq!(scale.classify(Score::new(3)), ScoreBand::Passive);
    assert_eq!(scale.classify(Score::new(4)), ScoreBand::Passive);
    assert_eq!(scale.classify(Score::new(5)), ScoreBand::Promoter);
}

#[test]
fn test_classification_is_monotonic() {
    for scale in [Scale::eleven_point(), Scale::five_point()] {
        let bands: Vec<ScoreBand> = scale.scores().map(|score| scale.classify(score)).collect();
        assert!(bands.windows(2).all(|pair| pair[0] <= pair[1]));
    }
}

#[test]
fn test_eleven_point_labels() {
    let scale = Scale::eleven_point();
    let expected = [
        "Muy malo",
        "Muy malo",
        "Malo",
        "Malo",
        "Regular",
        "Regular",
        "Bueno",
        "Bueno",
        "Muy bueno",
        "Muy bueno",
        "Excelente",
    ];
    for (score, label) in scale.scores().zip(expected) {
        assert_eq!(scale.label_for(score), label, "score {}", score);
    }
}

#[test]
fn test_five_point_labels() {
    let scale = Scale::five_point();
    let labels: Vec<&str> = scale.scores().map(|score| scale.label_for(score)).collect();
    assert_eq!(labels, vec!["Muy malo", "Malo", "Regular", "Bueno", "Excelente"]);
}

#[test]
fn test_label_for_out_of_range_clamps() {
    let scale = Scale::five_point();
    assert_eq!(scale.label_for(Score::new(0)), "Muy malo");
    assert_eq!(scale.label_for(Score::new(9)), "Excelente");
}

#[test]
fn test_score_validation() {
    let scale = Scale::eleven_point();
    assert_eq!(scale.score(0), Ok(Score::new(0)));
    assert_eq!(scale.score(10), Ok(Score::new(10)));
    assert_eq!(
        scale.score(11),
        Err(ScaleError::OutOfRange {
            score: 11,
            min: 0,
            max: 10
        })
    );

    let five = Scale::five_point();
    assert!(five.score(0).is_err());
    assert!(five.contains(Score::new(1)));
    assert!(!five.contains(Score::new(6)));
}

#[test]
fn test_range_and_len() {
    let scale = Scale::eleven_point();
    assert_eq!(scale.len(), 11);
    assert!(!scale.is_empty());
    assert_eq!(scale.scores().next(), Some(Score::new(0)));
    assert_eq!(scale.scores().last(), Some(Score::new(10)));

    assert_eq!(Scale::five_point().len(), 5);
}

#[test]
fn test_next_and_previous_saturate() {
    let scale = Scale::five_point();
    assert_eq!(scale.next(Score::new(3)), Score::new(4));
    assert_eq!(scale.next(Score::new(5)), Score::new(5));
    assert_eq!(scale.previous(Score::new(2)), Score::new(1));
    assert_eq!(scale.previous(Score::new(1)), Score::new(1));
}

#[test]
fn test_custom_scale() {
    let scale = Scale::new(1, 7, 4, 6, labels(7)).unwrap();
    assert_eq!(scale.classify(Score::new(3)), ScoreBand::Detractor);
    assert_eq!(scale.classify(Score::new(5)), ScoreBand::Passive);
    assert_eq!(scale.classify(Score::new(7)), ScoreBand::Promoter);
    assert_eq!(scale.label_for(Score::new(1)), "label 0");
}

#[test]
fn test_custom_scale_rejects_bad_definitions() {
    assert_eq!(
        Scale::new(5, 5, 5, 5, labels(1)),
        Err(ScaleError::EmptyRange { min: 5, max: 5 })
    );
    assert!(matches!(
        Scale::new(0, 10, 9, 7, labels(11)),
        Err(ScaleError::InvalidThresholds { .. })
    ));
    assert!(matches!(
        Scale::new(0, 10, 0, 9, labels(11)),
        Err(ScaleError::InvalidThresholds { .. })
    ));
    assert_eq!(
        Scale::new(0, 10, 7, 9, labels(10)),
        Err(ScaleError::LabelCount {
            expected: 11,
            actual: 10
        })
    );
}

#[test]
fn test_deserialize_validates_definition() {
    let inverted = r#"{"min":5,"max":1,"passive_from":0,"promoter_from":0,"labels":[]}"#;
    let err = serde_json::from_str::<Scale>(inverted).unwrap_err();
    assert!(err.to_string().contains("must be lower than maximum"));

    let missing_labels = r#"{"min":1,"max":5,"passive_from":3,"promoter_from":5,"labels":["a"]}"#;
    assert!(serde_json::from_str::<Scale>(missing_labels).is_err());

    let json = serde_json::to_string(&Scale::five_point()).unwrap();
    assert_eq!(serde_json::from_str::<Scale>(&json).unwrap(), Scale::five_point());
}

#[test]
fn test_presets() {
    assert_eq!(ScalePreset::default(), ScalePreset::ElevenPoint);
    assert_eq!(ScalePreset::ElevenPoint.scale(), Scale::eleven_point());
    assert_eq!(ScalePreset::FivePoint.scale().min(), 1);
    assert_eq!(Scale::default(), Scale::eleven_point());
}

#[test]
fn test_band_names_and_order() {
    assert!(ScoreBand::Detractor < ScoreBand::Passive);
    assert!(ScoreBand::Passive < ScoreBand::Promoter);
    assert_eq!(ScoreBand::Passive.name(), "Pasivo");
    assert_eq!(ScoreBand::Promoter.name(), "Promotor");
}

#[test]
fn test_score_serializes_as_number() {
    assert_eq!(serde_json::to_string(&Score::new(8)).unwrap(), "8");
}
