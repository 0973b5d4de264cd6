use errgen_macros::ErrorMessages;

#[allow(dead_code)]
#[derive(ErrorMessages)]
pub struct PathSpecifiedErrMsg {
    #[errgen(errmsg = "this is FOOBAR error")]
    foo_bar_err: (),
}
