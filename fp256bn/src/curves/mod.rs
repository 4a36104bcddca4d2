use ark_ec::{
    bn,
    bn::{Bn, BnConfig, TwistType},
};
use ark_ff::MontFp;

use crate::*;

pub mod g1;
pub mod g2;


pub struct Config;

impl BnConfig for Config {
    /// |u| = 0x6882F5C030B0A801
    const X: &'static [u64] = &[0x6882f5c030b0a801];
    /// `u` is negative.
    const X_IS_NEGATIVE: bool = true;
    /// NAF of |6u + 2|, least significant digit first
    const ATE_LOOP_COUNT: &'static [i8] = &[
        0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, -1, 0, 0, 0, 0, 0, 1, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0,
        1, 0, 0, 1, 0, 0, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, -1, 0, 0, 1, 0, 0, 1, 0, 0, 0, -1, 0,
        1, 0, -1, 0, 0, 1, 0, 1,
    ];

    /// (u+2)^((q-1)/3)
    const TWIST_MUL_BY_Q_X: Fq2 = Fq2::new(
        MontFp!("54951812740761921621508550042997553760355686598369706824444409084285027546547"),
        MontFp!("56304928782522767986428411651368473382827307979349835406281275567315241576447"),
    );
    /// (u+2)^((q-1)/2)
    const TWIST_MUL_BY_Q_Y: Fq2 = Fq2::new(
        MontFp!("64123661489051259549395582573134902769353997651851597872160257618303826410249"),
        MontFp!("12455233740787582226102603901798063480332116947941990545620105713977988302335"),
    );
    const TWIST_TYPE: TwistType = TwistType::D;
    type Fp = Fq;
    type Fp2Config = Fq2Config;
    type Fp6Config = Fq6Config;
    type Fp12Config = Fq12Config;
    type G1Config = g1::Config;
    type G2Config = g2::Config;
}

pub type Fp256Bn = Bn<Config>;

pub type G1Affine = bn::G1Affine<Config>;
pub type G1Projective = bn::G1Projective<Config>;
pub type G2Affine = bn::G2Affine<Config>;
pub type G2Projective = bn::G2Projective<Config>;
