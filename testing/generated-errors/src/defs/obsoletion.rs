use errgen_macros::ErrorMessages;

#[allow(dead_code)]
#[derive(ErrorMessages)]
pub struct ObsoletionErrMsg {
    #[errgen(errmsg = "this is ONE error")]
    one: (),
    #[errgen(errmsg = "this is TWO error", obsoleted = "true")]
    two: (),
    #[errgen(errmsg = "this is THREE error [%05.1f]", vars = "ratio f64")]
    three: (),
    #[errgen(errmsg = "disk is 100% full")]
    four: (),
}
