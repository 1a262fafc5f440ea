#[path = "components/score_scale.rs"]
mod score_scale;


#[path = "components/toast.rs"]
mod toast;
