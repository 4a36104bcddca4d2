use ark_ec::{
    models::{short_weierstrass::SWCurveConfig, CurveConfig},
    short_weierstrass::Affine,
};
use ark_ff::{Field, MontFp, Zero};

use crate::{Fq, Fq2, Fr};

pub type G2Affine = Affine<Config>;

#[derive(Copy, Clone, Default, PartialEq, Eq)]
pub struct Config;

impl CurveConfig for Config {
    type BaseField = Fq2;
    type ScalarField = Fr;

    /// COFACTOR = 2q - n = 36u^4 + 36u^3 + 30u^2 + 6u + 1
    /// 115792089237314936872688561244471742058716160722682141812912061045829793419289
    #[rustfmt::skip]
    const COFACTOR: &'static [u64] = &[
        0xb025084a8c9b1019,
        0x0cdc65fb129682ea,
        0x46e5f25eee71a4a0,
        0xfffffffffffcf0cd,
    ];

    /// COFACTOR_INV = COFACTOR^{-1} mod n
    const COFACTOR_INV: Fr =
        MontFp!("57896044618657468428656432464617852931973196036774626595017713536481373583359");
}

impl SWCurveConfig for Config {
    /// COEFF_A = [0, 0]
    const COEFF_A: Fq2 = Fq2::ZERO;

    /// COEFF_B = 3/(u+2)
    const COEFF_B: Fq2 = Fq2::new(
        MontFp!("69475253542388962123613136746683045235025527013456723119220245713577798710899"),
        MontFp!("23158417847462987374537712248894348411675175671152241039740081904525932903632"),
    );

    /// GENERATOR = (G2_GENERATOR_X, G2_GENERATOR_Y)
    const GENERATOR: G2Affine = G2Affine::new_unchecked(G2_GENERATOR_X, G2_GENERATOR_Y);

    #[inline(always)]
    fn mul_by_a(_: Self::BaseField) -> Self::BaseField {
        Self::BaseField::zero()
    }
}

// Cofactor multiple of a point of the twist with x = c + u for a small integer c
pub const G2_GENERATOR_X: Fq2 = Fq2::new(G2_GENERATOR_X_C0, G2_GENERATOR_X_C1);
pub const G2_GENERATOR_Y: Fq2 = Fq2::new(G2_GENERATOR_Y_C0, G2_GENERATOR_Y_C1);

pub const G2_GENERATOR_X_C0: Fq =
    MontFp!("15941906328307151487338121604312931401115288608223090520876681908724151266763");

pub const G2_GENERATOR_X_C1: Fq =
    MontFp!("54479281010895446985804055594439964865131372530396686893957845787895245440392");

pub const G2_GENERATOR_Y_C0: Fq =
    MontFp!("66745551967626374790616102394970279328350746340089438544514439196572609493002");

pub const G2_GENERATOR_Y_C1: Fq =
    MontFp!("60037352283227320180624457590718858390745845796244196901904523217220516137403");
