use errgen_macros::ErrorMessages;

#[allow(dead_code)]
#[derive(ErrorMessages)]
pub struct BasicErrMsg {
    #[errgen(errmsg = "this is FOO error")]
    foo_err: (),
    #[errgen(errmsg = "this is BAR error [%d, %s]", vars = "hoge i64, fuga &str")]
    bar_err: (),
}
