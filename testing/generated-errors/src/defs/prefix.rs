use errgen_macros::ErrorMessages;

#[allow(dead_code)]
#[derive(ErrorMessages)]
pub struct PrefixErrMsg {
    #[errgen(errmsg = "this is BUZ error")]
    buz_err: (),
    #[errgen(errmsg: "this is QUX error [%d, %s]" vars: "hoge i64, fuga String")]
    qux_err: (),
}
