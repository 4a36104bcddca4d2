use ark_ff::{fields::*, MontFp};

use crate::*;

pub type Fq12 = Fp12<Fq12Config>;

#[derive(Clone, Copy)]
pub struct Fq12Config;

impl Fp12Config for Fq12Config {
    type Fp6Config = Fq6Config;

    const NONRESIDUE: Fq6 = Fq6::new(Fq2::ZERO, Fq2::ONE, Fq2::ZERO);

    const FROBENIUS_COEFF_FP12_C1: &'static [Fq2] = &[
        // Fp2::NONRESIDUE^(((q^0) - 1) / 6)
        Fq2::new(Fq::ONE, Fq::ZERO),
        // Fp2::NONRESIDUE^(((q^1) - 1) / 6)
        Fq2::new(
            MontFp!("69454242204446675060886087150948190750548334058255376536148219570666880159868"),
            MontFp!("43175834221623682344628643015557485393654154035339444289296665696302199073376"),
        ),
        // Fp2::NONRESIDUE^(((q^2) - 1) / 6)
        Fq2::new(MontFp!("7687848157618018096874460774185039390143432256831478675464"), Fq::ZERO),
        // Fp2::NONRESIDUE^(((q^3) - 1) / 6)
        Fq2::new(
            MontFp!("12380896671525925726810115328325266302878829770688278601717833894626235571974"),
            MontFp!("90078445906390868645151005941085082099244062993524687901781398866272610153062"),
        ),
        // Fp2::NONRESIDUE^(((q^4) - 1) / 6)
        Fq2::new(MontFp!("7687848157618018096874460774185039390143432256831478675463"), Fq::ZERO),
        // Fp2::NONRESIDUE^(((q^5) - 1) / 6)
        Fq2::new(
            MontFp!("58718743704394187538612589421848817610706374068194107264270023846589019930269"),
            MontFp!("46902611684767186300522362925527596705589908958185243612484733169970411079686"),
        ),
        // Fp2::NONRESIDUE^(((q^6) - 1) / 6)
        Fq2::new(MontFp!("-1"), Fq::ZERO),
        // Fp2::NONRESIDUE^(((q^7) - 1) / 6)
        Fq2::new(
            MontFp!("46337847032868261811802474093523551307827544297505828662552189951962784358295"),
            MontFp!("72616255015691254528059918228914256664721724320421760909403743826327465444787"),
        ),
        // Fp2::NONRESIDUE^(((q^8) - 1) / 6)
        Fq2::new(
            MontFp!("115792089237314936865000713086853723961501417581576165808556977265798185842699"),
            Fq::ZERO,
        ),
        // Fp2::NONRESIDUE^(((q^9) - 1) / 6)
        Fq2::new(
            MontFp!("103411192565789011145878445916146475755497048585072926596982575628003428946189"),
            MontFp!("25713643330924068227537555303386659959131815362236517296919010656357054365101"),
        ),
        // Fp2::NONRESIDUE^(((q^10) - 1) / 6)
        Fq2::new(
            MontFp!("115792089237314936865000713086853723961501417581576165808556977265798185842700"),
            Fq::ZERO,
        ),
        // Fp2::NONRESIDUE^(((q^11) - 1) / 6)
        Fq2::new(
            MontFp!("57073345532920749334075971822622924447669504287567097934430385676040644587894"),
            MontFp!("68889477552547750572166198318944145352785969397575961586215676352659253438477"),
        ),
    ];
}
