//! Built-in periodic table data.
//!
//! One row per element, 1 through 118. Physical property coverage is
//! intentionally partial: measured values where they are well known,
//! `None` where they are not (synthetic and short-lived elements). The
//! games treat the gaps through their documented fallback policies.

use super::types::{ElementFamily, ElementRecord, MatterState};

macro_rules! el {
    ($num:expr, $sym:expr, $name:expr, $family:ident, $period:expr, $group:expr, $state:ident,
     $mass:expr, $melt:expr, $boil:expr, $dens:expr, $en:expr, $radius:expr, $ion:expr) => {
        ElementRecord {
            atomic_number: $num,
            symbol: $sym.to_string(),
            name: $name.to_string(),
            family: ElementFamily::$family,
            period: $period,
            group: $group,
            state: MatterState::$state,
            atomic_mass: $mass,
            melting_point_c: $melt,
            boiling_point_c: $boil,
            density_g_cm3: $dens,
            electronegativity: $en,
            atomic_radius_pm: $radius,
            ionization_energy_ev: $ion,
        }
    };
}

/// The full 118-element table, ordered by atomic number.
#[rustfmt::skip]
pub(crate) fn builtin_elements() -> Vec<ElementRecord> {
    vec![
        el!(1, "H", "Hydrogen", ReactiveNonmetal, 1, Some(1), Gas, Some(1.008), Some(-259.1), Some(-252.9), Some(0.00009), Some(2.20), Some(53.0), Some(13.60)),
        el!(2, "He", "Helium", NobleGas, 1, Some(18), Gas, Some(4.003), Some(-272.2), Some(-268.9), Some(0.00018), None, Some(31.0), Some(24.59)),
        el!(3, "Li", "Lithium", AlkaliMetal, 2, Some(1), Solid, Some(6.94), Some(180.5), Some(1342.0), Some(0.534), Some(0.98), Some(167.0), Some(5.39)),
        el!(4, "Be", "Beryllium", AlkalineEarthMetal, 2, Some(2), Solid, Some(9.012), Some(1287.0), Some(2470.0), Some(1.85), Some(1.57), Some(112.0), Some(9.32)),
        el!(5, "B", "Boron", Metalloid, 2, Some(13), Solid, Some(10.81), Some(2076.0), Some(3927.0), Some(2.34), Some(2.04), Some(87.0), Some(8.30)),
        el!(6, "C", "Carbon", ReactiveNonmetal, 2, Some(14), Solid, Some(12.011), Some(3550.0), Some(4027.0), Some(2.27), Some(2.55), Some(67.0), Some(11.26)),
        el!(7, "N", "Nitrogen", ReactiveNonmetal, 2, Some(15), Gas, Some(14.007), Some(-210.0), Some(-195.8), Some(0.00125), Some(3.04), Some(56.0), Some(14.53)),
        el!(8, "O", "Oxygen", ReactiveNonmetal, 2, Some(16), Gas, Some(15.999), Some(-218.8), Some(-183.0), Some(0.00143), Some(3.44), Some(48.0), Some(13.62)),
        el!(9, "F", "Fluorine", Halogen, 2, Some(17), Gas, Some(18.998), Some(-219.6), Some(-188.1), Some(0.0017), Some(3.98), Some(42.0), Some(17.42)),
        el!(10, "Ne", "Neon", NobleGas, 2, Some(18), Gas, Some(20.180), Some(-248.6), Some(-246.1), Some(0.0009), None, Some(38.0), Some(21.56)),
        el!(11, "Na", "Sodium", AlkaliMetal, 3, Some(1), Solid, Some(22.990), Some(97.8), Some(883.0), Some(0.971), Some(0.93), Some(190.0), Some(5.14)),
        el!(12, "Mg", "Magnesium", AlkalineEarthMetal, 3, Some(2), Solid, Some(24.305), Some(650.0), Some(1090.0), Some(1.74), Some(1.31), Some(145.0), Some(7.65)),
        el!(13, "Al", "Aluminium", PostTransitionMetal, 3, Some(13), Solid, Some(26.982), Some(660.3), Some(2519.0), Some(2.70), Some(1.61), Some(118.0), Some(5.99)),
        el!(14, "Si", "Silicon", Metalloid, 3, Some(14), Solid, Some(28.085), Some(1414.0), Some(3265.0), Some(2.33), Some(1.90), Some(111.0), Some(8.15)),
        el!(15, "P", "Phosphorus", ReactiveNonmetal, 3, Some(15), Solid, Some(30.974), Some(44.2), Some(280.5), Some(1.82), Some(2.19), Some(98.0), Some(10.49)),
        el!(16, "S", "Sulfur", ReactiveNonmetal, 3, Some(16), Solid, Some(32.06), Some(115.2), Some(444.6), Some(2.07), Some(2.58), Some(88.0), Some(10.36)),
        el!(17, "Cl", "Chlorine", Halogen, 3, Some(17), Gas, Some(35.45), Some(-101.5), Some(-34.0), Some(0.0032), Some(3.16), Some(79.0), Some(12.97)),
        el!(18, "Ar", "Argon", NobleGas, 3, Some(18), Gas, Some(39.948), Some(-189.3), Some(-185.8), Some(0.0018), None, Some(71.0), Some(15.76)),
        el!(19, "K", "Potassium", AlkaliMetal, 4, Some(1), Solid, Some(39.098), Some(63.4), Some(759.0), Some(0.862), Some(0.82), Some(243.0), Some(4.34)),
        el!(20, "Ca", "Calcium", AlkalineEarthMetal, 4, Some(2), Solid, Some(40.078), Some(842.0), Some(1484.0), Some(1.54), Some(1.00), Some(194.0), Some(6.11)),
        el!(21, "Sc", "Scandium", TransitionMetal, 4, Some(3), Solid, Some(44.956), Some(1541.0), Some(2836.0), Some(2.99), Some(1.36), Some(184.0), Some(6.56)),
        el!(22, "Ti", "Titanium", TransitionMetal, 4, Some(4), Solid, Some(47.867), Some(1668.0), Some(3287.0), Some(4.51), Some(1.54), Some(176.0), Some(6.83)),
        el!(23, "V", "Vanadium", TransitionMetal, 4, Some(5), Solid, Some(50.942), Some(1910.0), Some(3407.0), Some(6.11), Some(1.63), Some(171.0), Some(6.75)),
        el!(24, "Cr", "Chromium", TransitionMetal, 4, Some(6), Solid, Some(51.996), Some(1907.0), Some(2671.0), Some(7.19), Some(1.66), Some(166.0), Some(6.77)),
        el!(25, "Mn", "Manganese", TransitionMetal, 4, Some(7), Solid, Some(54.938), Some(1246.0), Some(2061.0), Some(7.21), Some(1.55), Some(161.0), Some(7.43)),
        el!(26, "Fe", "Iron", TransitionMetal, 4, Some(8), Solid, Some(55.845), Some(1538.0), Some(2862.0), Some(7.87), Some(1.83), Some(156.0), Some(7.90)),
        el!(27, "Co", "Cobalt", TransitionMetal, 4, Some(9), Solid, Some(58.933), Some(1495.0), Some(2927.0), Some(8.90), Some(1.88), Some(152.0), Some(7.88)),
        el!(28, "Ni", "Nickel", TransitionMetal, 4, Some(10), Solid, Some(58.693), Some(1455.0), Some(2913.0), Some(8.91), Some(1.91), Some(149.0), Some(7.64)),
        el!(29, "Cu", "Copper", TransitionMetal, 4, Some(11), Solid, Some(63.546), Some(1085.0), Some(2562.0), Some(8.96), Some(1.90), Some(145.0), Some(7.73)),
        el!(30, "Zn", "Zinc", TransitionMetal, 4, Some(12), Solid, Some(65.38), Some(419.5), Some(907.0), Some(7.14), Some(1.65), Some(142.0), Some(9.39)),
        el!(31, "Ga", "Gallium", PostTransitionMetal, 4, Some(13), Solid, Some(69.723), Some(29.8), Some(2204.0), Some(5.91), Some(1.81), Some(136.0), Some(6.00)),
        el!(32, "Ge", "Germanium", Metalloid, 4, Some(14), Solid, Some(72.63), Some(938.3), Some(2833.0), Some(5.32), Some(2.01), Some(125.0), Some(7.90)),
        el!(33, "As", "Arsenic", Metalloid, 4, Some(15), Solid, Some(74.922), Some(817.0), Some(614.0), Some(5.73), Some(2.18), Some(114.0), Some(9.79)),
        el!(34, "Se", "Selenium", ReactiveNonmetal, 4, Some(16), Solid, Some(78.971), Some(221.0), Some(685.0), Some(4.81), Some(2.55), Some(103.0), Some(9.75)),
        el!(35, "Br", "Bromine", Halogen, 4, Some(17), Liquid, Some(79.904), Some(-7.2), Some(58.8), Some(3.10), Some(2.96), Some(94.0), Some(11.81)),
        el!(36, "Kr", "Krypton", NobleGas, 4, Some(18), Gas, Some(83.798), Some(-157.4), Some(-153.2), Some(0.0037), Some(3.00), Some(88.0), Some(14.00)),
        el!(37, "Rb", "Rubidium", AlkaliMetal, 5, Some(1), Solid, Some(85.468), Some(39.3), Some(688.0), Some(1.53), Some(0.82), Some(265.0), Some(4.18)),
        el!(38, "Sr", "Strontium", AlkalineEarthMetal, 5, Some(2), Solid, Some(87.62), Some(777.0), Some(1382.0), Some(2.64), Some(0.95), Some(219.0), Some(5.69)),
        el!(39, "Y", "Yttrium", TransitionMetal, 5, Some(3), Solid, Some(88.906), Some(1526.0), Some(3336.0), Some(4.47), Some(1.22), Some(212.0), Some(6.22)),
        el!(40, "Zr", "Zirconium", TransitionMetal, 5, Some(4), Solid, Some(91.224), Some(1855.0), Some(4409.0), Some(6.52), Some(1.33), Some(206.0), Some(6.63)),
        el!(41, "Nb", "Niobium", TransitionMetal, 5, Some(5), Solid, Some(92.906), Some(2477.0), Some(4744.0), Some(8.57), Some(1.60), Some(198.0), Some(6.76)),
        el!(42, "Mo", "Molybdenum", TransitionMetal, 5, Some(6), Solid, Some(95.95), Some(2623.0), Some(4639.0), Some(10.28), Some(2.16), Some(190.0), Some(7.09)),
        el!(43, "Tc", "Technetium", TransitionMetal, 5, Some(7), Solid, Some(98.0), Some(2157.0), Some(4265.0), Some(11.0), Some(1.90), Some(183.0), Some(7.28)),
        el!(44, "Ru", "Ruthenium", TransitionMetal, 5, Some(8), Solid, Some(101.07), Some(2334.0), Some(4150.0), Some(12.45), Some(2.20), Some(178.0), Some(7.36)),
        el!(45, "Rh", "Rhodium", TransitionMetal, 5, Some(9), Solid, Some(102.906), Some(1964.0), Some(3695.0), Some(12.41), Some(2.28), Some(173.0), Some(7.46)),
        el!(46, "Pd", "Palladium", TransitionMetal, 5, Some(10), Solid, Some(106.42), Some(1555.0), Some(2963.0), Some(12.02), Some(2.20), Some(169.0), Some(8.34)),
        el!(47, "Ag", "Silver", TransitionMetal, 5, Some(11), Solid, Some(107.868), Some(961.8), Some(2162.0), Some(10.49), Some(1.93), Some(165.0), Some(7.58)),
        el!(48, "Cd", "Cadmium", TransitionMetal, 5, Some(12), Solid, Some(112.414), Some(321.1), Some(767.0), Some(8.65), Some(1.69), Some(161.0), Some(8.99)),
        el!(49, "In", "Indium", PostTransitionMetal, 5, Some(13), Solid, Some(114.818), Some(156.6), Some(2072.0), Some(7.31), Some(1.78), Some(156.0), Some(5.79)),
        el!(50, "Sn", "Tin", PostTransitionMetal, 5, Some(14), Solid, Some(118.71), Some(231.9), Some(2602.0), Some(7.26), Some(1.96), Some(145.0), Some(7.34)),
        el!(51, "Sb", "Antimony", Metalloid, 5, Some(15), Solid, Some(121.76), Some(630.6), Some(1587.0), Some(6.68), Some(2.05), Some(133.0), Some(8.61)),
        el!(52, "Te", "Tellurium", Metalloid, 5, Some(16), Solid, Some(127.6), Some(449.5), Some(988.0), Some(6.23), Some(2.10), Some(123.0), Some(9.01)),
        el!(53, "I", "Iodine", Halogen, 5, Some(17), Solid, Some(126.904), Some(113.7), Some(184.3), Some(4.93), Some(2.66), Some(115.0), Some(10.45)),
        el!(54, "Xe", "Xenon", NobleGas, 5, Some(18), Gas, Some(131.293), Some(-111.8), Some(-108.1), Some(0.0059), Some(2.60), Some(108.0), Some(12.13)),
        el!(55, "Cs", "Caesium", AlkaliMetal, 6, Some(1), Solid, Some(132.905), Some(28.4), Some(671.0), Some(1.87), Some(0.79), Some(298.0), Some(3.89)),
        el!(56, "Ba", "Barium", AlkalineEarthMetal, 6, Some(2), Solid, Some(137.327), Some(727.0), Some(1870.0), Some(3.59), Some(0.89), Some(253.0), Some(5.21)),
        el!(57, "La", "Lanthanum", Lanthanide, 6, None, Solid, Some(138.905), Some(920.0), Some(3464.0), Some(6.15), Some(1.10), Some(195.0), Some(5.58)),
        el!(58, "Ce", "Cerium", Lanthanide, 6, None, Solid, Some(140.116), Some(795.0), Some(3443.0), Some(6.77), Some(1.12), Some(185.0), Some(5.54)),
        el!(59, "Pr", "Praseodymium", Lanthanide, 6, None, Solid, Some(140.908), Some(935.0), Some(3529.0), Some(6.77), Some(1.13), Some(247.0), Some(5.47)),
        el!(60, "Nd", "Neodymium", Lanthanide, 6, None, Solid, Some(144.242), Some(1024.0), Some(3074.0), Some(7.01), Some(1.14), Some(206.0), Some(5.53)),
        el!(61, "Pm", "Promethium", Lanthanide, 6, None, Solid, Some(145.0), Some(1042.0), Some(3000.0), Some(7.26), None, Some(205.0), Some(5.58)),
        el!(62, "Sm", "Samarium", Lanthanide, 6, None, Solid, Some(150.36), Some(1072.0), Some(1794.0), Some(7.52), Some(1.17), Some(238.0), Some(5.64)),
        el!(63, "Eu", "Europium", Lanthanide, 6, None, Solid, Some(151.964), Some(826.0), Some(1529.0), Some(5.24), None, Some(231.0), Some(5.67)),
        el!(64, "Gd", "Gadolinium", Lanthanide, 6, None, Solid, Some(157.25), Some(1312.0), Some(3273.0), Some(7.90), Some(1.20), Some(233.0), Some(6.15)),
        el!(65, "Tb", "Terbium", Lanthanide, 6, None, Solid, Some(158.925), Some(1356.0), Some(3230.0), Some(8.23), None, Some(225.0), Some(5.86)),
        el!(66, "Dy", "Dysprosium", Lanthanide, 6, None, Solid, Some(162.5), Some(1407.0), Some(2562.0), Some(8.55), Some(1.22), Some(228.0), Some(5.94)),
        el!(67, "Ho", "Holmium", Lanthanide, 6, None, Solid, Some(164.93), Some(1461.0), Some(2720.0), Some(8.80), Some(1.23), Some(226.0), Some(6.02)),
        el!(68, "Er", "Erbium", Lanthanide, 6, None, Solid, Some(167.259), Some(1529.0), Some(2868.0), Some(9.07), Some(1.24), Some(226.0), Some(6.11)),
        el!(69, "Tm", "Thulium", Lanthanide, 6, None, Solid, Some(168.934), Some(1545.0), Some(1950.0), Some(9.32), Some(1.25), Some(222.0), Some(6.18)),
        el!(70, "Yb", "Ytterbium", Lanthanide, 6, None, Solid, Some(173.045), Some(824.0), Some(1196.0), Some(6.90), None, Some(222.0), Some(6.25)),
        el!(71, "Lu", "Lutetium", Lanthanide, 6, None, Solid, Some(174.967), Some(1652.0), Some(3402.0), Some(9.84), Some(1.27), Some(217.0), Some(5.43)),
        el!(72, "Hf", "Hafnium", TransitionMetal, 6, Some(4), Solid, Some(178.49), Some(2233.0), Some(4603.0), Some(13.31), Some(1.30), Some(208.0), Some(6.83)),
        el!(73, "Ta", "Tantalum", TransitionMetal, 6, Some(5), Solid, Some(180.948), Some(3017.0), Some(5458.0), Some(16.69), Some(1.50), Some(200.0), Some(7.55)),
        el!(74, "W", "Tungsten", TransitionMetal, 6, Some(6), Solid, Some(183.84), Some(3422.0), Some(5555.0), Some(19.25), Some(2.36), Some(193.0), Some(7.86)),
        el!(75, "Re", "Rhenium", TransitionMetal, 6, Some(7), Solid, Some(186.207), Some(3186.0), Some(5596.0), Some(21.02), Some(1.90), Some(188.0), Some(7.83)),
        el!(76, "Os", "Osmium", TransitionMetal, 6, Some(8), Solid, Some(190.23), Some(3033.0), Some(5012.0), Some(22.59), Some(2.20), Some(185.0), Some(8.44)),
        el!(77, "Ir", "Iridium", TransitionMetal, 6, Some(9), Solid, Some(192.217), Some(2446.0), Some(4428.0), Some(22.56), Some(2.20), Some(180.0), Some(8.97)),
        el!(78, "Pt", "Platinum", TransitionMetal, 6, Some(10), Solid, Some(195.084), Some(1768.3), Some(3825.0), Some(21.45), Some(2.28), Some(177.0), Some(8.96)),
        el!(79, "Au", "Gold", TransitionMetal, 6, Some(11), Solid, Some(196.967), Some(1064.2), Some(2856.0), Some(19.28), Some(2.54), Some(174.0), Some(9.23)),
        el!(80, "Hg", "Mercury", TransitionMetal, 6, Some(12), Liquid, Some(200.592), Some(-38.8), Some(356.7), Some(13.53), Some(2.00), Some(171.0), Some(10.44)),
        el!(81, "Tl", "Thallium", PostTransitionMetal, 6, Some(13), Solid, Some(204.38), Some(304.0), Some(1473.0), Some(11.85), Some(1.62), Some(156.0), Some(6.11)),
        el!(82, "Pb", "Lead", PostTransitionMetal, 6, Some(14), Solid, Some(207.2), Some(327.5), Some(1749.0), Some(11.34), Some(2.33), Some(154.0), Some(7.42)),
        el!(83, "Bi", "Bismuth", PostTransitionMetal, 6, Some(15), Solid, Some(208.98), Some(271.4), Some(1564.0), Some(9.78), Some(2.02), Some(143.0), Some(7.29)),
        el!(84, "Po", "Polonium", PostTransitionMetal, 6, Some(16), Solid, Some(209.0), Some(254.0), Some(962.0), Some(9.20), Some(2.00), Some(135.0), Some(8.41)),
        el!(85, "At", "Astatine", Halogen, 6, Some(17), Solid, Some(210.0), Some(302.0), None, None, Some(2.20), Some(127.0), Some(9.32)),
        el!(86, "Rn", "Radon", NobleGas, 6, Some(18), Gas, Some(222.0), Some(-71.0), Some(-61.7), Some(0.0097), None, Some(120.0), Some(10.75)),
        el!(87, "Fr", "Francium", AlkaliMetal, 7, Some(1), Solid, Some(223.0), Some(27.0), None, None, Some(0.70), None, Some(4.07)),
        el!(88, "Ra", "Radium", AlkalineEarthMetal, 7, Some(2), Solid, Some(226.0), Some(700.0), Some(1737.0), Some(5.50), Some(0.90), None, Some(5.28)),
        el!(89, "Ac", "Actinium", Actinide, 7, None, Solid, Some(227.0), Some(1050.0), Some(3198.0), Some(10.07), Some(1.10), None, Some(5.17)),
        el!(90, "Th", "Thorium", Actinide, 7, None, Solid, Some(232.038), Some(1750.0), Some(4788.0), Some(11.72), Some(1.30), None, Some(6.31)),
        el!(91, "Pa", "Protactinium", Actinide, 7, None, Solid, Some(231.036), Some(1572.0), Some(4000.0), Some(15.37), Some(1.50), None, Some(5.89)),
        el!(92, "U", "Uranium", Actinide, 7, None, Solid, Some(238.029), Some(1135.0), Some(4131.0), Some(19.05), Some(1.38), None, Some(6.19)),
        el!(93, "Np", "Neptunium", Actinide, 7, None, Solid, Some(237.0), Some(644.0), Some(3902.0), Some(20.45), Some(1.36), None, Some(6.27)),
        el!(94, "Pu", "Plutonium", Actinide, 7, None, Solid, Some(244.0), Some(640.0), Some(3228.0), Some(19.84), Some(1.28), None, Some(6.03)),
        el!(95, "Am", "Americium", Actinide, 7, None, Solid, Some(243.0), Some(1176.0), Some(2607.0), Some(13.69), Some(1.30), None, Some(5.97)),
        el!(96, "Cm", "Curium", Actinide, 7, None, Solid, Some(247.0), Some(1345.0), Some(3110.0), Some(13.51), Some(1.30), None, Some(5.99)),
        el!(97, "Bk", "Berkelium", Actinide, 7, None, Solid, Some(247.0), Some(986.0), None, Some(14.78), Some(1.30), None, Some(6.20)),
        el!(98, "Cf", "Californium", Actinide, 7, None, Solid, Some(251.0), Some(900.0), None, Some(15.10), Some(1.30), None, Some(6.28)),
        el!(99, "Es", "Einsteinium", Actinide, 7, None, Solid, Some(252.0), Some(860.0), None, Some(8.84), Some(1.30), None, Some(6.37)),
        el!(100, "Fm", "Fermium", Actinide, 7, None, Solid, Some(257.0), Some(1527.0), None, None, Some(1.30), None, Some(6.50)),
        el!(101, "Md", "Mendelevium", Actinide, 7, None, Solid, Some(258.0), Some(827.0), None, None, Some(1.30), None, Some(6.58)),
        el!(102, "No", "Nobelium", Actinide, 7, None, Solid, Some(259.0), Some(827.0), None, None, Some(1.30), None, Some(6.63)),
        el!(103, "Lr", "Lawrencium", Actinide, 7, None, Solid, Some(266.0), Some(1627.0), None, None, None, None, Some(4.90)),
        el!(104, "Rf", "Rutherfordium", TransitionMetal, 7, Some(4), Solid, Some(267.0), None, None, None, None, None, None),
        el!(105, "Db", "Dubnium", TransitionMetal, 7, Some(5), Solid, Some(268.0), None, None, None, None, None, None),
        el!(106, "Sg", "Seaborgium", TransitionMetal, 7, Some(6), Solid, Some(269.0), None, None, None, None, None, None),
        el!(107, "Bh", "Bohrium", TransitionMetal, 7, Some(7), Solid, Some(270.0), None, None, None, None, None, None),
        el!(108, "Hs", "Hassium", TransitionMetal, 7, Some(8), Solid, Some(277.0), None, None, None, None, None, None),
        el!(109, "Mt", "Meitnerium", TransitionMetal, 7, Some(9), Solid, Some(278.0), None, None, None, None, None, None),
        el!(110, "Ds", "Darmstadtium", TransitionMetal, 7, Some(10), Solid, Some(281.0), None, None, None, None, None, None),
        el!(111, "Rg", "Roentgenium", TransitionMetal, 7, Some(11), Solid, Some(282.0), None, None, None, None, None, None),
        el!(112, "Cn", "Copernicium", TransitionMetal, 7, Some(12), Solid, Some(285.0), None, None, None, None, None, None),
        el!(113, "Nh", "Nihonium", PostTransitionMetal, 7, Some(13), Solid, Some(286.0), None, None, None, None, None, None),
        el!(114, "Fl", "Flerovium", PostTransitionMetal, 7, Some(14), Solid, Some(289.0), None, None, None, None, None, None),
        el!(115, "Mc", "Moscovium", PostTransitionMetal, 7, Some(15), Solid, Some(290.0), None, None, None, None, None, None),
        el!(116, "Lv", "Livermorium", PostTransitionMetal, 7, Some(16), Solid, Some(293.0), None, None, None, None, None, None),
        el!(117, "Ts", "Tennessine", Halogen, 7, Some(17), Solid, Some(294.0), None, None, None, None, None, None),
        el!(118, "Og", "Oganesson", NobleGas, 7, Some(18), Gas, Some(294.0), None, None, None, None, None, None),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_has_118_elements() {
        assert_eq!(builtin_elements().len(), 118);
    }

    #[test]
    fn test_atomic_numbers_sequential() {
        for (i, e) in builtin_elements().iter().enumerate() {
            assert_eq!(e.atomic_number, i as u32 + 1);
        }
    }

    #[test]
    fn test_symbols_unique() {
        let mut symbols: Vec<String> = builtin_elements().iter().map(|e| e.symbol.clone()).collect();
        symbols.sort();
        symbols.dedup();
        assert_eq!(symbols.len(), 118);
    }

    #[test]
    fn test_lanthanides_and_actinides_have_no_group() {
        for e in builtin_elements() {
            let f_block = matches!(
                e.family,
                ElementFamily::Lanthanide | ElementFamily::Actinide
            );
            assert_eq!(e.group.is_none(), f_block, "element {}", e.atomic_number);
        }
    }

    #[test]
    fn test_periods_in_range() {
        for e in builtin_elements() {
            assert!((1..=7).contains(&e.period), "element {}", e.atomic_number);
            if let Some(g) = e.group {
                assert!((1..=18).contains(&g), "element {}", e.atomic_number);
            }
        }
    }

    #[test]
    fn test_room_temperature_liquids() {
        let liquids: Vec<u32> = builtin_elements()
            .iter()
            .filter(|e| e.state == MatterState::Liquid)
            .map(|e| e.atomic_number)
            .collect();
        // Bromine and mercury
        assert_eq!(liquids, vec![35, 80]);
    }

    #[test]
    fn test_hydrogen_density_near_zero() {
        let table = builtin_elements();
        let h = &table[0];
        let d = h.density_g_cm3.unwrap();
        assert!(d > 0.0 && d < 0.001);
    }
}
