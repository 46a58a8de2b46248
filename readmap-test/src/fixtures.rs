//! Reads, databases and known-good aligner reports
//!
//! The reports were produced by BLAT with `-out=blast9` for the query and
//! database sequences below.

use readmap_core::OptionValue;

/// Three 16S reads, RNA alphabet
pub const QUERY_FASTA: &str = "\
>NZ_GG770509_647533119\n\
UACUUGGAGUUUGAUCCUGGCUCAGAACGAACGCUGGCGGCAGGCUUAACACAUGCAAGUCGAGCGAGCGGCAGACGGGUGAGUAACGCGUGGGAACGUACCAUUUGCUACGGAAUAACUCAGGGAAACUUGUGCUAAUACCGUAUGUGGAAAGUCGGCAAAUGAUCGGCCCGCGUUGGAUUAGCUAGUUGGUGGGGUAAAGGCUCACCAAGGCGACGAUCCAUAGCUGGUCUGAGAGGAUGAUCAGCCACACUGGGACUGAGACACGGCCCAGACUCCUACGGGAGGCAGCAGUGGGGAAUAUUGGACAAUGGGCGCAAGCCUGAUCCAGCCAUGCCGCGUGAGUGAUGAAGGCCCUAGGGUUGUAAAGCUCUUUCACCGGUGAAGAUGACGGUAACCGGAGAAGAAGCCCCGGCUAACUUCGUGCCAGCAGCCGCGGUAAUACGAAGGGGGCUAGCGUUGUUCGGAUUUACUGGGCGUAAAGCGCACGUAGGCGGACUUUUAAGUCAGGGGUGAAAUCCCGGGGCUCAACCCCGGAACUGCCUUUGAUACUGGAAGUCUUGAGUAUGGUAGAGGUGAGUGGAAUUCCGAGUGUAGAGGUGAAAUUCGUAGAUAUUCGGAGGAACACCAGUGGCGAAGGCGGCUCACUGGACCAACUGACGCUGAGGUGCGAAAGCGUGGGGAGCAAACAGGAUUAGAUACCCUGGUAGUCCACGCCGUAAACGAUGAAUGUUAGCCGUCGGGGCUUCGGUGGCGCAGCUAACGCAUUAAACAUUCCGCCUGGGGAGUGCGGUCGCAAGAUUAAAACUCAAAGGAAUUGACGGGGGCCCGCACAAGCGGUGGAGCAUGUGGUUUAAUUCGAAGCAACGCGCAGAACCUUACCAGCCCUUGACAUCGACAGGUGCUGCAUGGCUGUCGUCAGCUCGUGUCGUGAGAUGUUGGGUUAAGUCCCGCAACGAGCGCAACCCUCGCCCUUAGUUGCCAGCAUGGGCACUCUAAGGGGACUGCCGGUGAUAAGCCGGAGGAAGGUGGGGAUGACGUCAAGUCCUCAUGGCCCUUACGGGCUGGGCUACACACGUGCUACAAUGGUGGUCAGUGGGCAGCGAGCACGCGAGUGUGAGCUAAUCUCCGCCAUCUCAGUUCGGAUGCACUCUGCAACUCGAGUGCAGAAGUUGGAAUCGCUAGUAAUCGCGGAUCAGCAUGCCGCGGUGAAUACGUUCCCGGGCCUUGUACACACCGCCCGUCACACCAUGGGAGUUGGUUUUACCCGAAGGCGCUUGCUAGGCAGGCGACCACGGUAGGGUCAGCGACUGGGGUGAAGUCGUAACAAGGUAGCCGUAGGGGAACCUGCGGCUGGAUCACCUCCUUUCU\n\
>NZ_GG739926_647533195\n\
UAAUGGGAGUUUGAUCCUGGCUCAGGAUGAACGCUGGCUACAGGCUUAACACAUGCAAGUCGAGGGACCGGCGCACGGGUGAGUAACGCGUAUCCAACCUUCCCGCGACCAAGGGAUAACCUGCCGAAAGGCAGACUAAUACCUUAUGUCCAAAGUCGGUCACGGAUGGGGAUGCGUCCGAUUAGCUUGUUGGCGGGGCAACGGCCCACCAAGGCAUCGAUCGGUAGGGGUUCUGAGAGGAAGGCCCCCCACACUGGAACUGAGACACGGUCCAGACUCCUACGGGAGGCAGCAGUGAGGAAUAUUGGUCAAUGGGCGGAAGCCUGAACCAGCCAAGUAGCGUGCAGGACGACGGCCUACGGGUUGUAAACUGCUUUUAUGCGGGGAUAUGCAGGUACCGCAUGAAUAAGGACCGGCUAAUUCCGUGCCAGCAGCCGCGGUAAUACGGAAGGUCCGGGCGUUAUCCGGAUUUAUUGGGUUUAAAGGGAGCGCAGGCCGCCGUGCAAGCGUGCCGUGAAAAGCAGCGGCCCAACCGCUGCCCUGCGGCGCGAACUGCUUGGCUUGAGUGCGCCGGAAGCGGGCGGAAUUCGUGGUGUAGCGGUGAAAUGCUUAGAUAUCACGAAGAACCCCGAUUGCGAAGGCAGCCCGCUGUGGCGACUGACGCUGAGGCUCGAAGGUGCGGGUAUCGAACAGGAUUAGAUACCCUGGUAGUCCGCACGGUAAACGAUGGAUACCCGCUGUCCGGCUCUGGGCGGCCAAGCGAAAGCGUUAAGUAUCCCACCUGGGGAGUACGCCGGCAACGGUGAAACUCAAAGGAAUUGACGGGGGCCCGCACAAGCGGAGGAACAUGUGGUUUAAUUCGAUGAUACGCGAGGAACCUUACCCGGGCUUGAAUUGUGAAGGUGCUGCAUGGUUGUCGUCAGCUCGUGCCGUGAGGUGUCGGCUCAAGUGCCAUAACGAGCGCAACCCCUCUCCGCAGUUGCCAUCGGCCGGGCACUCUGCGGACACUGCCGCCGCAAGGUGGAGGAAGGUGGGGAUGACGUCAAAUCAGCACGGCCCUUACGUCCGGGGCCACACACGUGUUACAAUGGCCGGCAGAGGGCUGUCCGCGCGCAAGUGCGGGUGAAUCCCCUCCGGUCCCAGUUCGGAUGGGGUCUGCAACCCGACCCCAGAAGCUGGAUUCGCUAGUAAUCGCGCAUCAGCCAUGGCGCGGUGAAUACGUUCCCGGGCCUUGUACACACCGCCCGUCAAGCCAUGAAAGCCGGGGGUGCCUGAAGUCCGUGUCGGCCUAGGGCAAAACCGGUGAUUGGGGCUAAGUCGUAACAAGGUAGCCGUACCGGAAGGUGCGGCUGGAACACCUCCUUUCU\n\
>NZ_ACIZ01000148_643886127\n\
AAUAUGGAGUUUGAUCCUGGCUCAGGAUGAACGCUGGCGGCGUGCCUAAUACAUGCAAGUCGAACGAGUGGCGGACGGGUGAGUAACACGUGGGUAACCUGCCCUUAAGUGGGGGAUAACAUUUGGAAACAGAUGCUAAUACCGCAUAAAGAAAGUCGCUUUUGGAUGGACCCGCGGCGUAUUAGCUAGUUGGUGAGGUAACGGCUCACCAAGGCAAUGAUACGUAGCCGAACUGAGAGGUUGAUCGGCCACAUUGGGACUGAGACACGGCCCAAACUCCUACGGGAGGCAGCAGUAGGGAAUCUUCCACAAUGGACGCAAGUCUGAUGGAGCAACGCCGCGUGAGUGAAGAAGGCUUUCGGGUCGUAAAACUCUGUUGUUGGAGAAGAUGACGGUAUCCAACCAGAAAGCCACGGCUAACUACGUGCCAGCAGCCGCGGUAAUACGUAGGUGGCAAGCGUUAUCCGGAUUUAUUGGGCGUAAAGCGAGCGCAGGCGGUUUUUUAAGUCUGAUGUGAAAGCCCUCGGCUUAACCGAGGAAGUGCAUCGGAAACUGGGAAACUUGAGUGCAGAAGAGGACAGUGGAACUCCAUGUGUAGCGGUGAAAUGCGUAGAUAUAUGGAAGAACACCAGUGGCGAAGGCGGCUGUCUGGUCUGACUGACGCUGAGGCUCGAAAGCAUGGGUAGCGAACAGGAUUAGAUACCCUGGUAGUCCAUGCCGUAAACGAUGAAUGCUAGGUGUUGGAGCUUCAGUGCCGCAGCUAACGCAUUAAGCAUUCCGCCUGGGGAGUACGACCGCAAGGUUGAAACUCAAAGGAAUUGACGGGGGCCCGCACAAGCGGUGGAGCAUGUGGUUUAAUUCGAAGCAACGCGAAGAACCUUACCAGGUCUUGACAUCGACAGGUGGUGCAUGGUUGUCGUCAGCUCGUGUCGUGAGAUGUUGGGUUAAGUCCCGCAACGAGCGCAACCCUUAUGACUAGUUGCCAGCAUGGGCACUCUAGUAAGACUGCCGGUGACAAACCGGAGGAAGGUGGGGAUGACGUCAAAUCAUCAUGCCCCUUAUGACCUGGGCUACACACGUGCUACAAUGGAUGGCAACGAGUUGCGAGACCGCGAGGUCAAGCUAAUCUCUUCCAUUCUCAGUUCGGAUGUAGGCUGCAACUCGCCUACAGAAGUCGGAAUCGCUAGUAAUCGCGGAUCAGCACGCCGCGGUGAAUACGUUCCCGGGCCUUGUACACACCGCCCGUCACACCAUGAGAGUUUGUAACACCCGAAGCCGGUGCGUAGCGAGCCGUCUAAGGUGGGACAAAUGAUUAGGGUGAAGUCGUAACAAGGUAGCCGUAGGAGAACCUGCGGCUGGAUCACCUCCUUUCU\n\
";

/// Nucleotide database holding the same three sequences
pub const DNA_DATABASE_FASTA: &str = "\
>NZ_GG770509_647533119\n\
UACUUGGAGUUUGAUCCUGGCUCAGAACGAACGCUGGCGGCAGGCUUAACACAUGCAAGUCGAGCGAGCGGCAGACGGGUGAGUAACGCGUGGGAACGUACCAUUUGCUACGGAAUAACUCAGGGAAACUUGUGCUAAUACCGUAUGUGGAAAGUCGGCAAAUGAUCGGCCCGCGUUGGAUUAGCUAGUUGGUGGGGUAAAGGCUCACCAAGGCGACGAUCCAUAGCUGGUCUGAGAGGAUGAUCAGCCACACUGGGACUGAGACACGGCCCAGACUCCUACGGGAGGCAGCAGUGGGGAAUAUUGGACAAUGGGCGCAAGCCUGAUCCAGCCAUGCCGCGUGAGUGAUGAAGGCCCUAGGGUUGUAAAGCUCUUUCACCGGUGAAGAUGACGGUAACCGGAGAAGAAGCCCCGGCUAACUUCGUGCCAGCAGCCGCGGUAAUACGAAGGGGGCUAGCGUUGUUCGGAUUUACUGGGCGUAAAGCGCACGUAGGCGGACUUUUAAGUCAGGGGUGAAAUCCCGGGGCUCAACCCCGGAACUGCCUUUGAUACUGGAAGUCUUGAGUAUGGUAGAGGUGAGUGGAAUUCCGAGUGUAGAGGUGAAAUUCGUAGAUAUUCGGAGGAACACCAGUGGCGAAGGCGGCUCACUGGACCAACUGACGCUGAGGUGCGAAAGCGUGGGGAGCAAACAGGAUUAGAUACCCUGGUAGUCCACGCCGUAAACGAUGAAUGUUAGCCGUCGGGGCUUCGGUGGCGCAGCUAACGCAUUAAACAUUCCGCCUGGGGAGUGCGGUCGCAAGAUUAAAACUCAAAGGAAUUGACGGGGGCCCGCACAAGCGGUGGAGCAUGUGGUUUAAUUCGAAGCAACGCGCAGAACCUUACCAGCCCUUGACAUCGACAGGUGCUGCAUGGCUGUCGUCAGCUCGUGUCGUGAGAUGUUGGGUUAAGUCCCGCAACGAGCGCAACCCUCGCCCUUAGUUGCCAGCAUGGGCACUCUAAGGGGACUGCCGGUGAUAAGCCGGAGGAAGGUGGGGAUGACGUCAAGUCCUCAUGGCCCUUACGGGCUGGGCUACACACGUGCUACAAUGGUGGUCAGUGGGCAGCGAGCACGCGAGUGUGAGCUAAUCUCCGCCAUCUCAGUUCGGAUGCACUCUGCAACUCGAGUGCAGAAGUUGGAAUCGCUAGUAAUCGCGGAUCAGCAUGCCGCGGUGAAUACGUUCCCGGGCCUUGUACACACCGCCCGUCACACCAUGGGAGUUGGUUUUACCCGAAGGCGCUUGCUAGGCAGGCGACCACGGUAGGGUCAGCGACUGGGGUGAAGUCGUAACAAGGUAGCCGUAGGGGAACCUGCGGCUGGAUCACCUCCUUUCU\n\
>NZ_GG739926_647533195\n\
UAAUGGGAGUUUGAUCCUGGCUCAGGAUGAACGCUGGCUACAGGCUUAACACAUGCAAGUCGAGGGACCGGCGCACGGGUGAGUAACGCGUAUCCAACCUUCCCGCGACCAAGGGAUAACCUGCCGAAAGGCAGACUAAUACCUUAUGUCCAAAGUCGGUCACGGAUGGGGAUGCGUCCGAUUAGCUUGUUGGCGGGGCAACGGCCCACCAAGGCAUCGAUCGGUAGGGGUUCUGAGAGGAAGGCCCCCCACACUGGAACUGAGACACGGUCCAGACUCCUACGGGAGGCAGCAGUGAGGAAUAUUGGUCAAUGGGCGGAAGCCUGAACCAGCCAAGUAGCGUGCAGGACGACGGCCUACGGGUUGUAAACUGCUUUUAUGCGGGGAUAUGCAGGUACCGCAUGAAUAAGGACCGGCUAAUUCCGUGCCAGCAGCCGCGGUAAUACGGAAGGUCCGGGCGUUAUCCGGAUUUAUUGGGUUUAAAGGGAGCGCAGGCCGCCGUGCAAGCGUGCCGUGAAAAGCAGCGGCCCAACCGCUGCCCUGCGGCGCGAACUGCUUGGCUUGAGUGCGCCGGAAGCGGGCGGAAUUCGUGGUGUAGCGGUGAAAUGCUUAGAUAUCACGAAGAACCCCGAUUGCGAAGGCAGCCCGCUGUGGCGACUGACGCUGAGGCUCGAAGGUGCGGGUAUCGAACAGGAUUAGAUACCCUGGUAGUCCGCACGGUAAACGAUGGAUACCCGCUGUCCGGCUCUGGGCGGCCAAGCGAAAGCGUUAAGUAUCCCACCUGGGGAGUACGCCGGCAACGGUGAAACUCAAAGGAAUUGACGGGGGCCCGCACAAGCGGAGGAACAUGUGGUUUAAUUCGAUGAUACGCGAGGAACCUUACCCGGGCUUGAAUUGUGAAGGUGCUGCAUGGUUGUCGUCAGCUCGUGCCGUGAGGUGUCGGCUCAAGUGCCAUAACGAGCGCAACCCCUCUCCGCAGUUGCCAUCGGCCGGGCACUCUGCGGACACUGCCGCCGCAAGGUGGAGGAAGGUGGGGAUGACGUCAAAUCAGCACGGCCCUUACGUCCGGGGCCACACACGUGUUACAAUGGCCGGCAGAGGGCUGUCCGCGCGCAAGUGCGGGUGAAUCCCCUCCGGUCCCAGUUCGGAUGGGGUCUGCAACCCGACCCCAGAAGCUGGAUUCGCUAGUAAUCGCGCAUCAGCCAUGGCGCGGUGAAUACGUUCCCGGGCCUUGUACACACCGCCCGUCAAGCCAUGAAAGCCGGGGGUGCCUGAAGUCCGUGUCGGCCUAGGGCAAAACCGGUGAUUGGGGCUAAGUCGUAACAAGGUAGCCGUACCGGAAGGUGCGGCUGGAACACCUCCUUUCU\n\
>NZ_ACIZ01000148_643886127\n\
AAUAUGGAGUUUGAUCCUGGCUCAGGAUGAACGCUGGCGGCGUGCCUAAUACAUGCAAGUCGAACGAGUGGCGGACGGGUGAGUAACACGUGGGUAACCUGCCCUUAAGUGGGGGAUAACAUUUGGAAACAGAUGCUAAUACCGCAUAAAGAAAGUCGCUUUUGGAUGGACCCGCGGCGUAUUAGCUAGUUGGUGAGGUAACGGCUCACCAAGGCAAUGAUACGUAGCCGAACUGAGAGGUUGAUCGGCCACAUUGGGACUGAGACACGGCCCAAACUCCUACGGGAGGCAGCAGUAGGGAAUCUUCCACAAUGGACGCAAGUCUGAUGGAGCAACGCCGCGUGAGUGAAGAAGGCUUUCGGGUCGUAAAACUCUGUUGUUGGAGAAGAUGACGGUAUCCAACCAGAAAGCCACGGCUAACUACGUGCCAGCAGCCGCGGUAAUACGUAGGUGGCAAGCGUUAUCCGGAUUUAUUGGGCGUAAAGCGAGCGCAGGCGGUUUUUUAAGUCUGAUGUGAAAGCCCUCGGCUUAACCGAGGAAGUGCAUCGGAAACUGGGAAACUUGAGUGCAGAAGAGGACAGUGGAACUCCAUGUGUAGCGGUGAAAUGCGUAGAUAUAUGGAAGAACACCAGUGGCGAAGGCGGCUGUCUGGUCUGACUGACGCUGAGGCUCGAAAGCAUGGGUAGCGAACAGGAUUAGAUACCCUGGUAGUCCAUGCCGUAAACGAUGAAUGCUAGGUGUUGGAGCUUCAGUGCCGCAGCUAACGCAUUAAGCAUUCCGCCUGGGGAGUACGACCGCAAGGUUGAAACUCAAAGGAAUUGACGGGGGCCCGCACAAGCGGUGGAGCAUGUGGUUUAAUUCGAAGCAACGCGAAGAACCUUACCAGGUCUUGACAUCGACAGGUGGUGCAUGGUUGUCGUCAGCUCGUGUCGUGAGAUGUUGGGUUAAGUCCCGCAACGAGCGCAACCCUUAUGACUAGUUGCCAGCAUGGGCACUCUAGUAAGACUGCCGGUGACAAACCGGAGGAAGGUGGGGAUGACGUCAAAUCAUCAUGCCCCUUAUGACCUGGGCUACACACGUGCUACAAUGGAUGGCAACGAGUUGCGAGACCGCGAGGUCAAGCUAAUCUCUUCCAUUCUCAGUUCGGAUGUAGGCUGCAACUCGCCUACAGAAGUCGGAAUCGCUAGUAAUCGCGGAUCAGCACGCCGCGGUGAAUACGUUCCCGGGCCUUGUACACACCGCCCGUCACACCAUGAGAGUUUGUAACACCCGAAGCCGGUGCGUAGCGAGCCGUCUAAGGUGGGACAAAUGAUUAGGGUGAAGUCGUAACAAGGUAGCCGUAGGAGAACCUGCGGCUGGAUCACCUCCUUUCU\n\
";

/// Protein database for the translated-read workflow
pub const PROTEIN_DATABASE_FASTA: &str = "\
>NZ_GG770509_647533119\n\
YLEFDPGSERTLAAGLTHASRASGRRVSNAWERTICYGITQGNLCYRMetWKVGKSARVGLASWWGKGSPRRRSIAGLRGSATLGLRHGPDSYGRQQWGILDNGRKPDPAMetPRERPGCKALSPVKMetTVTGEEAPANFVPAAAVIRRGLALFGFTGRKAHVGGLLSQGNPGAQPRNCLYWKSVWRVEFRVRNSIFGGTPVAKAAHWTNRGAKAWGANRIRYPGSPRRKRMetLAVGASVAQLTHTFRLGSAVARLKLKGIDGGPHKRWSMetWFNSKQRAEPYQPLTSTGAAWLSSARVVRCWVKSRNERNPRPLPAWALGDCRAGGRWGRQVLMetALTGWATHVLQWWSVGSEHASVSSPPSQFGCTLQLECRSWNRSRISMetPRIRSRALYTPPVTPWELVLPEGACAGDHGRVSDWGEVVTRPGNLRLDHLLS\n\
>NZ_GG739926_647533195\n\
WEFDPGSGTLATGLTHASRGTGARVSNAYPTFPRPRDNLPKGRLIPYVQSRSRMGMRPISLLAGQRPTKASIGRGSERKAPHTGTETRSRLLREAAVRNIGQWAEATSQVACRTTAYGLTAFMRGYAGTAIRTGFRASSRGNTEGPGVIRIYWVRERRPPCKRAVKSSGPTAALRRELLGLSAPEAGGIRGVAVKCLDITKNPDCEGSPLWRLTLRLEGAGIEQDIPWSARTMDTRCPALGGQAKALSIPPGEYAGNGETQRNRGPAQAEEHVVFDDTRGTLPGLELRCCMVVVSSCREVSAQVPRAQPLSAVAIGRALCGHCRRKVEEGGDDVKSARPLRPGPHTCYNGRQRAVRAQVRVNPLRSQFGWGLQPDPRSWIRSRISHGAVNTFPGLVHTARQAMKAGGASPCRPRAKPVIGAKSQGSRTGRCGWNTSF\n\
>NZ_ACIZ01000148_643886127\n\
NMEFDPGSGTLAACLIHASRTSGGRVSNTWVTCPVGDNIWKQMLIPHKESRFWMDPRRISLVRRLTKAMIRSRTERLIGHIGTETRPKLLREAAVGNLPQWTQVWSNAAVKKAFGSNSVVGEDDGIQPESHGLRASSRGNTVASVIRIYWASERRRFFKSDVKALGLTEEVHRKLGNLSAEEDSGTPCVAVKCVDIWKNTSGEGGCLVLTLRLESMGSEQDIPWSMPTMNARCWSFSAAANALSIPPGEYDRKVETQRNRGPAQAVEHVVFEATRRTLPGLDIDRWCMVVVSSCREMLGVPQRAQPLLVASMGTLVRLPVTNRRKVGMTSNHHAPYDLGYTRATMDGNELRDREVKLISSILSSDVGCNSPTEVGIASNRGSARRGEYVPGPCTHRPSHHESLHPKPVRSEPSKVGQMIRVKSQGSRRRTCGWITS\n\
";

/// Report for `QUERY_FASTA` against `DNA_DATABASE_FASTA`
pub const DNA_REPORT: &str = "\
# BLAT 34 [2006/03/10]\n\
# Query: NZ_GG770509_647533119\n\
# Database: test_db.fasta\n\
# Fields: Query id, Subject id, % identity, alignment length, mismatches, gap openings, q. start, q. end, s. start, s. end, e-value, bit score\n\
NZ_GG770509_647533119\tNZ_GG770509_647533119\t100.00\t1371\t0\t0\t1\t1371\t1\t1371\t0.0e+00\t2187.0\n\
NZ_GG770509_647533119\tNZ_ACIZ01000148_643886127\t85.49\t634\t92\t0\t336\t969\t337\t970\t4.5e-234\t807.0\n\
NZ_GG770509_647533119\tNZ_ACIZ01000148_643886127\t86.08\t237\t33\t0\t1135\t1371\t1137\t1373\t1.2e-77\t287.0\n\
NZ_GG770509_647533119\tNZ_ACIZ01000148_643886127\t83.12\t154\t26\t0\t976\t1129\t977\t1130\t2.2e-48\t190.0\n\
NZ_GG770509_647533119\tNZ_GG739926_647533195\t78.42\t329\t71\t0\t656\t984\t657\t985\t4.8e-97\t351.0\n\
NZ_GG770509_647533119\tNZ_GG739926_647533195\t89.09\t110\t11\t1\t1138\t1246\t1141\t1250\t1.1e-30\t131.0\n\
NZ_GG770509_647533119\tNZ_GG739926_647533195\t86.96\t69\t9\t0\t1021\t1089\t1023\t1091\t3.2e-20\t96.0\n\
NZ_GG770509_647533119\tNZ_GG739926_647533195\t75.26\t97\t22\t2\t356\t450\t356\t452\t2.3e-13\t73.0\n\
NZ_GG770509_647533119\tNZ_GG739926_647533195\t90.57\t53\t5\t0\t1319\t1371\t1315\t1367\t2.5e-10\t63.0\n\
NZ_GG770509_647533119\tNZ_GG739926_647533195\t81.82\t22\t4\t0\t989\t1010\t992\t1013\t1.5e+02\t24.0\n\
# BLAT 34 [2006/03/10]\n\
# Query: NZ_GG739926_647533195\n\
# Database: test_db.fasta\n\
# Fields: Query id, Subject id, % identity, alignment length, mismatches, gap openings, q. start, q. end, s. start, s. end, e-value, bit score\n\
NZ_GG739926_647533195\tNZ_GG739926_647533195\t100.00\t1367\t0\t0\t1\t1367\t1\t1367\t0.0e+00\t2235.0\n\
NZ_GG739926_647533195\tNZ_ACIZ01000148_643886127\t76.22\t572\t136\t0\t414\t985\t414\t985\t1.7e-158\t556.0\n\
NZ_GG739926_647533195\tNZ_ACIZ01000148_643886127\t76.80\t181\t42\t0\t1023\t1203\t1022\t1202\t6.4e-53\t205.0\n\
NZ_GG739926_647533195\tNZ_ACIZ01000148_643886127\t96.00\t50\t2\t0\t1209\t1258\t1207\t1256\t6.4e-14\t75.0\n\
NZ_GG739926_647533195\tNZ_ACIZ01000148_643886127\t88.68\t53\t6\t0\t1315\t1367\t1321\t1373\t1.6e-09\t61.0\n\
NZ_GG739926_647533195\tNZ_ACIZ01000148_643886127\t77.27\t22\t5\t0\t992\t1013\t990\t1011\t8.5e+02\t22.0\n\
NZ_GG739926_647533195\tNZ_GG770509_647533119\t79.29\t280\t58\t0\t657\t936\t656\t935\t9.9e-82\t301.0\n\
NZ_GG739926_647533195\tNZ_GG770509_647533119\t89.09\t110\t11\t1\t1141\t1250\t1138\t1246\t1.1e-30\t131.0\n\
NZ_GG739926_647533195\tNZ_GG770509_647533119\t86.96\t69\t9\t0\t1023\t1091\t1021\t1089\t3.2e-20\t96.0\n\
NZ_GG739926_647533195\tNZ_GG770509_647533119\t75.26\t97\t22\t2\t356\t452\t356\t450\t2.3e-13\t73.0\n\
NZ_GG739926_647533195\tNZ_GG770509_647533119\t90.57\t53\t5\t0\t1315\t1367\t1319\t1371\t2.5e-10\t63.0\n\
NZ_GG739926_647533195\tNZ_GG770509_647533119\t80.00\t30\t6\t0\t956\t985\t955\t984\t1.2e-03\t41.0\n\
NZ_GG739926_647533195\tNZ_GG770509_647533119\t81.82\t22\t4\t0\t992\t1013\t989\t1010\t1.5e+02\t24.0\n\
# BLAT 34 [2006/03/10]\n\
# Query: NZ_ACIZ01000148_643886127\n\
# Database: test_db.fasta\n\
# Fields: Query id, Subject id, % identity, alignment length, mismatches, gap openings, q. start, q. end, s. start, s. end, e-value, bit score\n\
NZ_ACIZ01000148_643886127\tNZ_ACIZ01000148_643886127\t100.00\t1373\t0\t0\t1\t1373\t1\t1373\t0.0e+00\t2165.0\n\
NZ_ACIZ01000148_643886127\tNZ_GG770509_647533119\t85.49\t634\t92\t0\t337\t970\t336\t969\t4.5e-234\t807.0\n\
NZ_ACIZ01000148_643886127\tNZ_GG770509_647533119\t86.08\t237\t33\t0\t1137\t1373\t1135\t1371\t1.2e-77\t287.0\n\
NZ_ACIZ01000148_643886127\tNZ_GG770509_647533119\t83.12\t154\t26\t0\t977\t1130\t976\t1129\t2.2e-48\t190.0\n\
NZ_ACIZ01000148_643886127\tNZ_GG739926_647533195\t76.22\t572\t136\t0\t414\t985\t414\t985\t1.7e-158\t556.0\n\
NZ_ACIZ01000148_643886127\tNZ_GG739926_647533195\t76.80\t181\t42\t0\t1022\t1202\t1023\t1203\t6.4e-53\t205.0\n\
NZ_ACIZ01000148_643886127\tNZ_GG739926_647533195\t96.00\t50\t2\t0\t1207\t1256\t1209\t1258\t6.4e-14\t75.0\n\
NZ_ACIZ01000148_643886127\tNZ_GG739926_647533195\t88.68\t53\t6\t0\t1321\t1373\t1315\t1367\t1.6e-09\t61.0\n\
NZ_ACIZ01000148_643886127\tNZ_GG739926_647533195\t77.27\t22\t5\t0\t990\t1011\t992\t1013\t8.5e+02\t22.0\n\
";

/// Report for the frame translations of `QUERY_FASTA` against `PROTEIN_DATABASE_FASTA`
pub const PROTEIN_REPORT: &str = "\
# BLAT 34x13 [2009/02/26]\n\
# Query: NZ_GG770509_647533119_frame_1\n\
# Database: /home/adro2179/metagenome/test_db_prot.fasta\n\
# Fields: Query id, Subject id, % identity, alignment length, mismatches, gap openings, q. start, q. end, s. start, s. end, e-value, bit score\n\
NZ_GG770509_647533119_frame_1\tNZ_GG770509_647533119\t96.83\t441\t0\t7\t1\t427\t1\t441\t8.9e-254\t872.0\n\
# BLAT 34x13 [2009/02/26]\n\
# Query: NZ_GG770509_647533119_frame_2\n\
# Database: /home/adro2179/metagenome/test_db_prot.fasta\n\
# Fields: Query id, Subject id, % identity, alignment length, mismatches, gap openings, q. start, q. end, s. start, s. end, e-value, bit score\n\
NZ_GG770509_647533119_frame_2\tNZ_ACIZ01000148_643886127\t85.37\t41\t6\t0\t359\t399\t362\t402\t8.0e-13\t72.0\n\
NZ_GG770509_647533119_frame_2\tNZ_ACIZ01000148_643886127\t93.75\t16\t1\t0\t419\t434\t421\t436\t1.3e+00\t31.0\n\
NZ_GG770509_647533119_frame_2\tNZ_GG739926_647533195\t75.86\t29\t7\t0\t320\t348\t326\t354\t2.9e-04\t43.0\n\
# BLAT 34x13 [2009/02/26]\n\
# Query: NZ_GG770509_647533119_frame_3\n\
# Database: /home/adro2179/metagenome/test_db_prot.fasta\n\
# Fields: Query id, Subject id, % identity, alignment length, mismatches, gap openings, q. start, q. end, s. start, s. end, e-value, bit score\n\
NZ_GG770509_647533119_frame_3\tNZ_ACIZ01000148_643886127\t80.61\t98\t19\t0\t210\t307\t209\t306\t7.5e-39\t158.0\n\
NZ_GG770509_647533119_frame_3\tNZ_ACIZ01000148_643886127\t66.33\t98\t33\t0\t43\t140\t44\t141\t8.9e-27\t118.0\n\
NZ_GG770509_647533119_frame_3\tNZ_ACIZ01000148_643886127\t78.95\t38\t8\t0\t310\t347\t308\t345\t2.3e-08\t57.0\n\
NZ_GG770509_647533119_frame_3\tNZ_ACIZ01000148_643886127\t66.67\t30\t10\t0\t178\t207\t178\t207\t2.5e-01\t33.0\n\
NZ_GG770509_647533119_frame_3\tNZ_GG739926_647533195\t53.00\t100\t47\t0\t131\t230\t134\t233\t1.9e-18\t90.0\n\
NZ_GG770509_647533119_frame_3\tNZ_GG739926_647533195\t68.89\t45\t14\t0\t238\t282\t241\t285\t5.9e-09\t59.0\n\
NZ_GG770509_647533119_frame_3\tNZ_GG739926_647533195\t72.09\t43\t12\t0\t63\t105\t66\t108\t3.0e-08\t56.0\n\
# BLAT 34x13 [2009/02/26]\n\
# Query: NZ_GG739926_647533195_frame_1\n\
# Database: /home/adro2179/metagenome/test_db_prot.fasta\n\
# Fields: Query id, Subject id, % identity, alignment length, mismatches, gap openings, q. start, q. end, s. start, s. end, e-value, bit score\n\
NZ_GG739926_647533195_frame_1\tNZ_GG739926_647533195\t100.00\t437\t0\t0\t1\t437\t1\t437\t1.7e-263\t904.0\n\
NZ_GG739926_647533195_frame_1\tNZ_ACIZ01000148_643886127\t69.86\t73\t22\t0\t213\t285\t209\t281\t1.1e-20\t98.0\n\
NZ_GG739926_647533195_frame_1\tNZ_ACIZ01000148_643886127\t53.33\t60\t28\t0\t148\t207\t145\t204\t1.3e-06\t51.0\n\
NZ_GG739926_647533195_frame_1\tNZ_ACIZ01000148_643886127\t60.53\t38\t15\t0\t66\t103\t64\t101\t1.9e-03\t41.0\n\
NZ_GG739926_647533195_frame_1\tNZ_ACIZ01000148_643886127\t76.92\t26\t6\t0\t2\t27\t3\t28\t9.7e-03\t38.0\n\
NZ_GG739926_647533195_frame_1\tNZ_ACIZ01000148_643886127\t69.57\t23\t7\t0\t288\t310\t285\t307\t4.8e+00\t29.0\n\
NZ_GG739926_647533195_frame_1\tNZ_ACIZ01000148_643886127\t90.00\t10\t1\t0\t134\t143\t132\t141\t1.6e+04\t18.0\n\
# BLAT 34x13 [2009/02/26]\n\
# Query: NZ_GG739926_647533195_frame_2\n\
# Database: /home/adro2179/metagenome/test_db_prot.fasta\n\
# Fields: Query id, Subject id, % identity, alignment length, mismatches, gap openings, q. start, q. end, s. start, s. end, e-value, bit score\n\
NZ_GG739926_647533195_frame_2\tNZ_GG770509_647533119\t66.67\t42\t14\t0\t270\t311\t276\t317\t2.3e-08\t57.0\n\
NZ_GG739926_647533195_frame_2\tNZ_GG770509_647533119\t60.00\t45\t18\t0\t185\t229\t188\t232\t3.9e-06\t49.0\n\
NZ_GG739926_647533195_frame_2\tNZ_GG770509_647533119\t80.00\t20\t4\t0\t247\t266\t251\t270\t5.6e-01\t32.0\n\
# BLAT 34x13 [2009/02/26]\n\
# Query: NZ_GG739926_647533195_frame_3\n\
# Database: /home/adro2179/metagenome/test_db_prot.fasta\n\
# Fields: Query id, Subject id, % identity, alignment length, mismatches, gap openings, q. start, q. end, s. start, s. end, e-value, bit score\n\
NZ_GG739926_647533195_frame_3\tNZ_ACIZ01000148_643886127\t94.44\t18\t1\t0\t390\t407\t385\t402\t4.3e-03\t39.0\n\
# BLAT 34x13 [2009/02/26]\n\
# Query: NZ_ACIZ01000148_643886127_frame_1\n\
# Database: /home/adro2179/metagenome/test_db_prot.fasta\n\
# Fields: Query id, Subject id, % identity, alignment length, mismatches, gap openings, q. start, q. end, s. start, s. end, e-value, bit score\n\
NZ_ACIZ01000148_643886127_frame_1\tNZ_ACIZ01000148_643886127\t100.00\t436\t0\t0\t1\t436\t1\t436\t2.1e-261\t897.0\n\
NZ_ACIZ01000148_643886127_frame_1\tNZ_GG739926_647533195\t78.57\t42\t9\t0\t240\t281\t244\t285\t4.0e-10\t63.0\n\
NZ_ACIZ01000148_643886127_frame_1\tNZ_GG739926_647533195\t60.53\t38\t15\t0\t64\t101\t66\t103\t1.9e-03\t41.0\n\
NZ_ACIZ01000148_643886127_frame_1\tNZ_GG739926_647533195\t76.92\t26\t6\t0\t3\t28\t2\t27\t9.7e-03\t38.0\n\
NZ_ACIZ01000148_643886127_frame_1\tNZ_GG739926_647533195\t69.57\t23\t7\t0\t285\t307\t288\t310\t4.8e+00\t29.0\n\
# BLAT 34x13 [2009/02/26]\n\
# Query: NZ_ACIZ01000148_643886127_frame_2\n\
# Database: /home/adro2179/metagenome/test_db_prot.fasta\n\
# Fields: Query id, Subject id, % identity, alignment length, mismatches, gap openings, q. start, q. end, s. start, s. end, e-value, bit score\n\
NZ_ACIZ01000148_643886127_frame_2\tNZ_GG770509_647533119\t79.59\t147\t26\t2\t182\t324\t189\t335\t2.3e-61\t233.0\n\
NZ_ACIZ01000148_643886127_frame_2\tNZ_GG770509_647533119\t72.73\t33\t9\t0\t128\t160\t137\t169\t5.0e-04\t42.0\n\
NZ_ACIZ01000148_643886127_frame_2\tNZ_GG770509_647533119\t90.91\t22\t2\t0\t70\t91\t76\t97\t2.5e-03\t40.0\n\
# BLAT 34x13 [2009/02/26]\n\
# Query: NZ_ACIZ01000148_643886127_frame_3\n\
# Database: /home/adro2179/metagenome/test_db_prot.fasta\n\
# Fields: Query id, Subject id, % identity, alignment length, mismatches, gap openings, q. start, q. end, s. start, s. end, e-value, bit score\n\
NZ_ACIZ01000148_643886127_frame_3\tNZ_GG770509_647533119\t84.21\t38\t4\t1\t360\t395\t367\t404\t3.0e-08\t56.0\n\
NZ_ACIZ01000148_643886127_frame_3\tNZ_GG770509_647533119\t94.12\t17\t1\t0\t413\t429\t425\t441\t1.6e+00\t31.0\n\
NZ_ACIZ01000148_643886127_frame_3\tNZ_GG739926_647533195\t78.57\t28\t5\t1\t321\t347\t326\t353\t1.5e-03\t41.0\n\
";

pub const READ_IDS: [&str; 3] = [
    "NZ_GG770509_647533119",
    "NZ_GG739926_647533195",
    "NZ_ACIZ01000148_643886127",
];

/// Every tuning flag, in the order a caller might list them
pub fn full_flag_table() -> Vec<(&'static str, OptionValue)> {
    vec![
        ("-t", "dna".into()),
        ("-q", "dna".into()),
        ("-ooc", "11.ooc".into()),
        ("-tileSize", 1.into()),
        ("-stepSize", 2.into()),
        ("-oneOff", 1.into()),
        ("-minMatch", 2.into()),
        ("-minScore", 3.into()),
        ("-minIdentity", 4.into()),
        ("-maxGap", 5.into()),
        ("-makeOoc", "N.ooc".into()),
        ("-repMatch", 6.into()),
        ("-mask", "lower".into()),
        ("-qMask", "lower".into()),
        ("-repeats", "lower".into()),
        ("-minRepDivergence", 7.into()),
        ("-dots", 8.into()),
        ("-out", "psl".into()),
        ("-maxIntron", 9.into()),
    ]
}

/// Rendered flags block for [`full_flag_table`]
pub const FULL_FLAGS: &str = "-dots=8 -makeOoc=\"N.ooc\" -mask=lower -maxGap=5 \
-maxIntron=9 -minIdentity=4 -minMatch=2 -minRepDivergence=7 -minScore=3 -oneOff=1 \
-ooc=\"11.ooc\" -out=psl -q=dna -qMask=lower -repMatch=6 -repeats=lower -stepSize=2 \
-t=dna -tileSize=1";

/// A smaller set of search flags
pub fn search_flag_table() -> Vec<(&'static str, OptionValue)> {
    vec![
        ("-tileSize", 1.into()),
        ("-stepSize", 2.into()),
        ("-minMatch", 2.into()),
        ("-minScore", 3.into()),
        ("-minIdentity", 4.into()),
        ("-maxGap", 5.into()),
        ("-makeOoc", "N.ooc".into()),
        ("-out", "psl".into()),
        ("-maxIntron", 9.into()),
    ]
}

/// Rendered flags block for [`search_flag_table`]
pub const SEARCH_FLAGS: &str = "-makeOoc=\"N.ooc\" -maxGap=5 -maxIntron=9 -minIdentity=4 \
-minMatch=2 -minScore=3 -out=psl -stepSize=2 -tileSize=1";

/// Lines of a report that carry alignments
pub fn data_lines(report: &str) -> Vec<&str> {
    report
        .lines()
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_shapes() {
        assert_eq!(data_lines(DNA_REPORT).len(), 32);
        assert_eq!(data_lines(PROTEIN_REPORT).len(), 33);
        assert!(data_lines(DNA_REPORT)
            .iter()
            .all(|line| line.split('\t').count() == 12));
    }

    #[test]
    fn test_fasta_ids() {
        let ids: Vec<&str> = QUERY_FASTA
            .lines()
            .filter_map(|line| line.strip_prefix('>'))
            .collect();
        assert_eq!(ids, READ_IDS.to_vec());
    }

    #[test]
    fn test_flag_blocks_are_single_spaced() {
        assert!(!FULL_FLAGS.contains("  "));
        assert_eq!(FULL_FLAGS.split(' ').count(), full_flag_table().len());
        assert_eq!(SEARCH_FLAGS.split(' ').count(), search_flag_table().len());
    }
}
